use crate::{
    api::{ApiError, Credentials},
    state::session::Session,
};

pub const ACCOUNT_CREATED_MESSAGE: &str = "HR account created! Please login.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Operation failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PortalMode {
    #[default]
    Hr,
    Employee,
}

impl PortalMode {
    pub fn toggled(self) -> Self {
        match self {
            PortalMode::Hr => PortalMode::Employee,
            PortalMode::Employee => PortalMode::Hr,
        }
    }

    pub fn brand_headline(self) -> &'static str {
        match self {
            PortalMode::Hr => "Manage Your Team",
            PortalMode::Employee => "Employee Portal",
        }
    }

    pub fn brand_tagline(self) -> &'static str {
        match self {
            PortalMode::Hr => "Add employees, track availability and review leave requests in one place.",
            PortalMode::Employee => "Check your profile and request time off.",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            PortalMode::Hr => "Switch to Employee Portal",
            PortalMode::Employee => "Switch to HR Portal",
        }
    }

    /// Signup is only offered to HR.
    pub fn allows_signup(self) -> bool {
        self == PortalMode::Hr
    }
}

pub fn form_heading(mode: PortalMode, is_signup: bool) -> &'static str {
    match (mode, is_signup) {
        (PortalMode::Hr, true) => "Create Account",
        (PortalMode::Hr, false) => "Welcome Back",
        (PortalMode::Employee, _) => "Employee Login",
    }
}

pub fn submit_label(mode: PortalMode, is_signup: bool) -> &'static str {
    if mode.allows_signup() && is_signup {
        "Sign Up"
    } else {
        "Login"
    }
}

/// Lifecycle of a single submission attempt.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(ApiError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    AccountCreated,
    LoggedIn(Session),
}

pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please enter your email"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
