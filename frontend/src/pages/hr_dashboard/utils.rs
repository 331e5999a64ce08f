use crate::api::{ApiError, LeaveAction, LeaveRequest, LeaveStatus, NewEmployee};
use leptos::*;

pub const EMPLOYEE_ADDED_MESSAGE: &str = "Employee added successfully!";
pub const EMPLOYEE_ADD_FAILED_MESSAGE: &str = "Failed to add employee. Please try again.";
pub const EMPLOYEE_DELETED_MESSAGE: &str = "Employee deleted successfully";
pub const EMPLOYEE_DELETE_FAILED_MESSAGE: &str = "Failed to delete employee";
pub const STATUS_UPDATED_MESSAGE: &str = "Employee status updated";
pub const STATUS_UPDATE_FAILED_MESSAGE: &str = "Failed to update employee status";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

pub fn leave_action_failed_message(action: LeaveAction) -> String {
    format!("Failed to {} leave request", action.as_str())
}

pub fn leave_action_done_message(action: LeaveAction) -> &'static str {
    match action {
        LeaveAction::Approve => "Leave request approved",
        LeaveAction::Reject => "Leave request rejected",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HrTab {
    #[default]
    Employees,
    Leaves,
}

pub fn pending_leave_count(leaves: &[LeaveRequest]) -> usize {
    leaves
        .iter()
        .filter(|leave| leave.status == LeaveStatus::Pending)
        .count()
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub department: RwSignal<String>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
        }
    }
}

impl EmployeeFormState {
    /// Payload for the create call; every field must be filled in.
    pub fn to_payload(&self) -> Result<NewEmployee, ApiError> {
        let name = self.name.get_untracked().trim().to_string();
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        let department = self.department.get_untracked().trim().to_string();
        if name.is_empty() || email.is_empty() || password.is_empty() || department.is_empty() {
            return Err(ApiError::validation(MISSING_FIELDS_MESSAGE));
        }
        Ok(NewEmployee {
            name,
            email,
            password,
            department,
        })
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.department.set(String::new());
    }
}
