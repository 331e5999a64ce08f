use crate::{
    api::{ApiError, LeaveRequest, LeaveStatus, NewLeaveRequest},
    utils::time::parse_date,
};
use leptos::*;

pub const LEAVE_SUBMITTED_MESSAGE: &str = "Leave request submitted successfully!";
pub const LEAVE_SUBMIT_FAILED_MESSAGE: &str = "Failed to submit leave request. Please try again.";
pub const PROFILE_LOAD_FAILED_MESSAGE: &str = "Failed to load your profile";
pub const HISTORY_LOAD_FAILED_MESSAGE: &str = "Failed to load leave history";
pub const MISSING_LEAVE_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const INVALID_DATE_MESSAGE: &str = "Dates must use the YYYY-MM-DD format";
pub const DATE_ORDER_MESSAGE: &str = "End date cannot be before start date";

fn count_with(leaves: &[LeaveRequest], status: LeaveStatus) -> usize {
    leaves.iter().filter(|leave| leave.status == status).count()
}

pub fn pending_leaves(leaves: &[LeaveRequest]) -> usize {
    count_with(leaves, LeaveStatus::Pending)
}

pub fn approved_leaves(leaves: &[LeaveRequest]) -> usize {
    count_with(leaves, LeaveStatus::Approved)
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub from_date: RwSignal<String>,
    pub to_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            from_date: create_rw_signal(String::new()),
            to_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn to_payload(&self) -> Result<NewLeaveRequest, ApiError> {
        validate_leave(
            &self.from_date.get_untracked(),
            &self.to_date.get_untracked(),
            &self.reason.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.from_date.set(String::new());
        self.to_date.set(String::new());
        self.reason.set(String::new());
    }
}

pub fn validate_leave(from: &str, to: &str, reason: &str) -> Result<NewLeaveRequest, ApiError> {
    let (from, to, reason) = (from.trim(), to.trim(), reason.trim());
    if from.is_empty() || to.is_empty() || reason.is_empty() {
        return Err(ApiError::validation(MISSING_LEAVE_FIELDS_MESSAGE));
    }
    let (Some(start), Some(end)) = (parse_date(from), parse_date(to)) else {
        return Err(ApiError::validation(INVALID_DATE_MESSAGE));
    };
    if end < start {
        return Err(ApiError::validation(DATE_ORDER_MESSAGE));
    }
    Ok(NewLeaveRequest {
        from_date: from.to_string(),
        to_date: to.to_string(),
        reason: reason.to_string(),
    })
}
