use super::{
    repository::AuthRepository,
    utils::{
        validate_credentials, AuthOutcome, PortalMode, SubmissionState, ACCOUNT_CREATED_MESSAGE,
        FALLBACK_ERROR_MESSAGE,
    },
};
use crate::{
    api::{ApiClient, ApiError},
    router::DASHBOARD_ROUTE,
    state::{
        auth::{use_session, SessionContext},
        session::Session,
    },
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

/// Creates an HR account or logs in, depending on the portal mode. A
/// successful login is written to the session context before returning.
pub async fn submit_credentials(
    repo: &AuthRepository,
    ctx: SessionContext,
    mode: PortalMode,
    is_signup: bool,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, ApiError> {
    let credentials = validate_credentials(email, password)?;
    if mode.allows_signup() && is_signup {
        repo.create_hr_account(&credentials).await?;
        log::info!("HR account created for {}", credentials.email);
        return Ok(AuthOutcome::AccountCreated);
    }
    let response = repo.login(mode, &credentials).await?;
    let session = Session::from_login(&response);
    ctx.establish(session.clone())?;
    Ok(AuthOutcome::LoggedIn(session))
}

#[derive(Clone, Copy)]
pub struct AuthViewModel {
    pub mode: RwSignal<PortalMode>,
    pub is_signup: RwSignal<bool>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub state: RwSignal<SubmissionState>,
    pub success: RwSignal<Option<String>>,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            mode: create_rw_signal(PortalMode::default()),
            is_signup: create_rw_signal(false),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            state: create_rw_signal(SubmissionState::Idle),
            success: create_rw_signal(None),
        }
    }

    pub fn failure(&self) -> Option<ApiError> {
        match self.state.get() {
            SubmissionState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Banner text for the current failure.
    pub fn error(&self) -> Option<String> {
        self.failure()
            .map(|error| error.describe(FALLBACK_ERROR_MESSAGE))
    }

    /// Shows the notice an ended session left behind, if there is one.
    pub fn restore_notice(&self, ctx: SessionContext) {
        if let Some(notice) = ctx.take_notice() {
            self.state
                .set(SubmissionState::Failed(ApiError::unauthorized(notice)));
        }
    }

    pub fn toggle_mode(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
        self.is_signup.set(false);
        self.reset_feedback();
    }

    pub fn toggle_signup(&self) {
        self.is_signup.update(|flag| *flag = !*flag);
        self.reset_feedback();
    }

    fn reset_feedback(&self) {
        self.state.set(SubmissionState::Idle);
        self.success.set(None);
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one submission attempt against the view model. Returns `None` when a
/// submission is already in flight.
pub async fn run_submission(
    vm: AuthViewModel,
    repo: AuthRepository,
    ctx: SessionContext,
) -> Option<Result<AuthOutcome, ApiError>> {
    if vm.state.get_untracked().is_submitting() {
        return None;
    }
    vm.state.set(SubmissionState::Submitting);
    vm.success.set(None);

    let result = submit_credentials(
        &repo,
        ctx,
        vm.mode.get_untracked(),
        vm.is_signup.get_untracked(),
        &vm.email.get_untracked(),
        &vm.password.get_untracked(),
    )
    .await;

    match &result {
        Ok(AuthOutcome::AccountCreated) => {
            vm.success.set(Some(ACCOUNT_CREATED_MESSAGE.to_string()));
            vm.is_signup.set(false);
            vm.password.set(String::new());
            vm.state.set(SubmissionState::Success);
        }
        Ok(AuthOutcome::LoggedIn(_)) => {
            vm.state.set(SubmissionState::Success);
            navigation::navigate_to(DASHBOARD_ROUTE);
        }
        Err(err) => {
            log::error!("Authentication failed: {}", err);
            vm.state.set(SubmissionState::Failed(err.clone()));
        }
    }
    Some(result)
}

pub fn use_auth_view_model() -> (AuthViewModel, Callback<()>) {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = store_value(AuthRepository::new_with_client(Rc::new(api)));
    let ctx = use_session();
    let vm = AuthViewModel::new();
    vm.restore_notice(ctx);
    let submit = Callback::new(move |_| {
        let repo = repo.get_value();
        spawn_local(async move {
            run_submission(vm, repo, ctx).await;
        });
    });
    (vm, submit)
}
