use super::{
    repository::HrRepository,
    utils::{
        leave_action_done_message, leave_action_failed_message, EmployeeFormState, HrTab,
        EMPLOYEE_ADDED_MESSAGE, EMPLOYEE_ADD_FAILED_MESSAGE, EMPLOYEE_DELETED_MESSAGE,
        EMPLOYEE_DELETE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, STATUS_UPDATED_MESSAGE,
        STATUS_UPDATE_FAILED_MESSAGE,
    },
};
use crate::{
    api::{ApiClient, ApiError, Employee, EmployeeStatus, LeaveAction, LeaveRequest},
    state::{
        auth::{use_session, SessionContext},
        notifications::{notify_failure, notify_failure_verbatim, use_notifications, Notifications},
        session::Session,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct HrDashboardState {
    pub employees: RwSignal<Vec<Employee>>,
    pub leaves: RwSignal<Vec<LeaveRequest>>,
    pub loading: RwSignal<bool>,
    /// Set while a status change or leave decision is in flight.
    pub updating: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub active_tab: RwSignal<HrTab>,
    pub show_employee_form: RwSignal<bool>,
    pub form: EmployeeFormState,
    pub pending_delete: RwSignal<Option<String>>,
}

impl Default for HrDashboardState {
    fn default() -> Self {
        Self {
            employees: create_rw_signal(Vec::new()),
            leaves: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            updating: create_rw_signal(false),
            submitting: create_rw_signal(false),
            active_tab: create_rw_signal(HrTab::default()),
            show_employee_form: create_rw_signal(false),
            form: EmployeeFormState::default(),
            pending_delete: create_rw_signal(None),
        }
    }
}

/// Data operations behind the HR dashboard. Every call reads the session
/// from the context and reports failures as toasts.
#[derive(Clone)]
pub struct HrDashboard {
    repo: HrRepository,
    ctx: SessionContext,
    notifications: Notifications,
    pub state: HrDashboardState,
}

impl HrDashboard {
    pub fn new(repo: HrRepository, ctx: SessionContext, notifications: Notifications) -> Self {
        Self {
            repo,
            ctx,
            notifications,
            state: HrDashboardState::default(),
        }
    }

    fn session(&self) -> Result<Session, ApiError> {
        self.ctx
            .require()
            .map_err(|err| self.fail(err, LOAD_FAILED_MESSAGE))
    }

    fn fail(&self, error: ApiError, fallback: &str) -> ApiError {
        notify_failure(self.ctx, self.notifications, error, fallback)
    }

    /// Fetches employees and leaves concurrently.
    pub async fn load(&self) -> Result<(), ApiError> {
        let session = self.session()?;
        self.state.loading.set(true);
        let (employees, leaves) = futures::join!(
            self.repo.fetch_employees(&session),
            self.repo.fetch_leaves(&session)
        );
        self.state.loading.set(false);

        let employees = employees.map_err(|err| self.fail(err, LOAD_FAILED_MESSAGE))?;
        let leaves = leaves.map_err(|err| self.fail(err, LOAD_FAILED_MESSAGE))?;
        log::debug!(
            "Loaded {} employees and {} leave requests",
            employees.len(),
            leaves.len()
        );
        self.state.employees.set(employees);
        self.state.leaves.set(leaves);
        Ok(())
    }

    async fn refresh_leaves(&self, session: &Session) -> Result<(), ApiError> {
        let leaves = self
            .repo
            .fetch_leaves(session)
            .await
            .map_err(|err| self.fail(err, LOAD_FAILED_MESSAGE))?;
        self.state.leaves.set(leaves);
        Ok(())
    }

    pub fn open_employee_form(&self) {
        self.state.show_employee_form.set(true);
    }

    pub fn close_employee_form(&self) {
        self.state.show_employee_form.set(false);
        self.state.form.reset();
    }

    pub async fn create_employee(&self) -> Result<(), ApiError> {
        if self.state.submitting.get_untracked() {
            log::debug!("Employee creation already in flight");
            return Ok(());
        }
        let payload = self
            .state
            .form
            .to_payload()
            .map_err(|err| self.fail(err, EMPLOYEE_ADD_FAILED_MESSAGE))?;
        let session = self.session()?;

        self.state.submitting.set(true);
        let result = self.repo.add_employee(&session, &payload).await;
        self.state.submitting.set(false);

        let message = result.map_err(|err| self.fail(err, EMPLOYEE_ADD_FAILED_MESSAGE))?;
        self.close_employee_form();
        self.notifications
            .push_success(message.unwrap_or_else(|| EMPLOYEE_ADDED_MESSAGE.to_string()));
        self.load().await
    }

    pub fn request_delete(&self, id: impl Into<String>) {
        self.state.pending_delete.set(Some(id.into()));
    }

    pub fn cancel_delete(&self) {
        self.state.pending_delete.set(None);
    }

    /// Deletes the employee awaiting confirmation, if any.
    pub async fn confirm_delete(&self) -> Result<(), ApiError> {
        let Some(id) = self.state.pending_delete.get_untracked() else {
            return Ok(());
        };
        self.state.pending_delete.set(None);
        let session = self.session()?;
        match self.repo.delete_employee(&session, &id).await {
            Ok(()) => {
                self.state
                    .employees
                    .update(|employees| employees.retain(|employee| employee.id != id));
                self.notifications.push_success(EMPLOYEE_DELETED_MESSAGE);
                Ok(())
            }
            Err(err) => Err(notify_failure_verbatim(
                self.ctx,
                self.notifications,
                err,
                EMPLOYEE_DELETE_FAILED_MESSAGE,
            )),
        }
    }

    pub async fn change_status(&self, id: &str, status: EmployeeStatus) -> Result<(), ApiError> {
        if self.state.updating.get_untracked() {
            log::debug!("Ignoring status change for {} while another update runs", id);
            return Ok(());
        }
        let session = self.session()?;
        self.state.updating.set(true);
        let result = self.repo.update_status(&session, id, status).await;
        self.state.updating.set(false);

        result.map_err(|err| self.fail(err, STATUS_UPDATE_FAILED_MESSAGE))?;
        self.state.employees.update(|employees| {
            if let Some(employee) = employees.iter_mut().find(|employee| employee.id == id) {
                employee.status = status;
            }
        });
        self.notifications.push_success(STATUS_UPDATED_MESSAGE);
        Ok(())
    }

    pub async fn decide_leave(&self, id: &str, action: LeaveAction) -> Result<(), ApiError> {
        if self.state.updating.get_untracked() {
            log::debug!("Ignoring leave {} for {} while another update runs", action.as_str(), id);
            return Ok(());
        }
        let session = self.session()?;
        self.state.updating.set(true);
        let result = self.repo.decide_leave(&session, id, action).await;
        let result = match result {
            Ok(()) => self.refresh_leaves(&session).await,
            Err(err) => Err(notify_failure_verbatim(
                self.ctx,
                self.notifications,
                err,
                &leave_action_failed_message(action),
            )),
        };
        self.state.updating.set(false);
        result?;
        self.notifications.push_success(leave_action_done_message(action));
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct HrDashboardViewModel {
    pub state: HrDashboardState,
    controller: StoredValue<HrDashboard>,
    pub load_action: Action<(), ()>,
    pub create_employee_action: Action<(), ()>,
    pub delete_action: Action<(), ()>,
    pub status_action: Action<(String, EmployeeStatus), ()>,
    pub leave_action: Action<(String, LeaveAction), ()>,
}

impl HrDashboardViewModel {
    pub fn controller(&self) -> HrDashboard {
        self.controller.get_value()
    }
}

pub fn use_hr_dashboard_view_model() -> HrDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let controller = HrDashboard::new(
        HrRepository::new_with_client(Rc::new(api)),
        use_session(),
        use_notifications(),
    );
    let state = controller.state;
    let controller = store_value(controller);

    let load_action = create_action(move |_: &()| {
        let dashboard = controller.get_value();
        async move {
            let _ = dashboard.load().await;
        }
    });
    let create_employee_action = create_action(move |_: &()| {
        let dashboard = controller.get_value();
        async move {
            let _ = dashboard.create_employee().await;
        }
    });
    let delete_action = create_action(move |_: &()| {
        let dashboard = controller.get_value();
        async move {
            let _ = dashboard.confirm_delete().await;
        }
    });
    let status_action = create_action(move |(id, status): &(String, EmployeeStatus)| {
        let dashboard = controller.get_value();
        let id = id.clone();
        let status = *status;
        async move {
            let _ = dashboard.change_status(&id, status).await;
        }
    });
    let leave_action = create_action(move |(id, action): &(String, LeaveAction)| {
        let dashboard = controller.get_value();
        let id = id.clone();
        let action = *action;
        async move {
            let _ = dashboard.decide_leave(&id, action).await;
        }
    });

    // Effects never run during server rendering, so the initial fetch only
    // happens in the browser.
    create_effect(move |loaded: Option<()>| {
        if loaded.is_none() {
            load_action.dispatch(());
        }
    });

    HrDashboardViewModel {
        state,
        controller,
        load_action,
        create_employee_action,
        delete_action,
        status_action,
        leave_action,
    }
}
