use super::{
    repository::EmployeeRepository,
    utils::{
        LeaveFormState, HISTORY_LOAD_FAILED_MESSAGE, LEAVE_SUBMITTED_MESSAGE,
        LEAVE_SUBMIT_FAILED_MESSAGE, PROFILE_LOAD_FAILED_MESSAGE,
    },
};
use crate::{
    api::{ApiClient, ApiError, Employee, LeaveRequest},
    state::{
        auth::{use_session, SessionContext},
        notifications::{notify_failure, use_notifications, Notifications},
        session::Session,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeeDashboardState {
    pub profile: RwSignal<Option<Employee>>,
    pub history: RwSignal<Vec<LeaveRequest>>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub show_leave_form: RwSignal<bool>,
    pub form: LeaveFormState,
}

impl Default for EmployeeDashboardState {
    fn default() -> Self {
        Self {
            profile: create_rw_signal(None),
            history: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            submitting: create_rw_signal(false),
            show_leave_form: create_rw_signal(false),
            form: LeaveFormState::default(),
        }
    }
}

#[derive(Clone)]
pub struct EmployeeDashboard {
    repo: EmployeeRepository,
    ctx: SessionContext,
    notifications: Notifications,
    pub state: EmployeeDashboardState,
}

impl EmployeeDashboard {
    pub fn new(
        repo: EmployeeRepository,
        ctx: SessionContext,
        notifications: Notifications,
    ) -> Self {
        Self {
            repo,
            ctx,
            notifications,
            state: EmployeeDashboardState::default(),
        }
    }

    fn fail(&self, error: ApiError, fallback: &str) -> ApiError {
        notify_failure(self.ctx, self.notifications, error, fallback)
    }

    fn session(&self) -> Result<Session, ApiError> {
        self.ctx
            .require()
            .map_err(|err| self.fail(err, PROFILE_LOAD_FAILED_MESSAGE))
    }

    /// Loads the profile, then the leave history.
    pub async fn load(&self) -> Result<(), ApiError> {
        let session = self.session()?;
        self.state.loading.set(true);
        let result = self.load_with(&session).await;
        self.state.loading.set(false);
        result
    }

    async fn load_with(&self, session: &Session) -> Result<(), ApiError> {
        let profile = self
            .repo
            .fetch_profile(session)
            .await
            .map_err(|err| self.fail(err, PROFILE_LOAD_FAILED_MESSAGE))?;
        self.state.profile.set(Some(profile));
        self.refresh_history(session).await
    }

    async fn refresh_history(&self, session: &Session) -> Result<(), ApiError> {
        let history = self
            .repo
            .fetch_history(session)
            .await
            .map_err(|err| self.fail(err, HISTORY_LOAD_FAILED_MESSAGE))?;
        self.state.history.set(history);
        Ok(())
    }

    pub fn toggle_leave_form(&self) {
        let open = !self.state.show_leave_form.get_untracked();
        self.state.show_leave_form.set(open);
        if !open {
            self.state.form.reset();
        }
    }

    pub async fn submit_leave(&self) -> Result<(), ApiError> {
        if self.state.submitting.get_untracked() {
            log::debug!("Leave submission already in flight");
            return Ok(());
        }
        let payload = self
            .state
            .form
            .to_payload()
            .map_err(|err| self.fail(err, LEAVE_SUBMIT_FAILED_MESSAGE))?;
        let session = self.session()?;

        self.state.submitting.set(true);
        let result = self.repo.submit_leave(&session, &payload).await;
        self.state.submitting.set(false);
        result.map_err(|err| self.fail(err, LEAVE_SUBMIT_FAILED_MESSAGE))?;

        log::info!(
            "Leave requested from {} to {}",
            payload.from_date,
            payload.to_date
        );
        self.state.form.reset();
        self.state.show_leave_form.set(false);
        self.notifications.push_success(LEAVE_SUBMITTED_MESSAGE);
        self.refresh_history(&session).await
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeDashboardViewModel {
    pub state: EmployeeDashboardState,
    controller: StoredValue<EmployeeDashboard>,
    pub load_action: Action<(), ()>,
    pub submit_action: Action<(), ()>,
}

impl EmployeeDashboardViewModel {
    pub fn controller(&self) -> EmployeeDashboard {
        self.controller.get_value()
    }
}

pub fn use_employee_dashboard_view_model() -> EmployeeDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let controller = EmployeeDashboard::new(
        EmployeeRepository::new_with_client(Rc::new(api)),
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
    let submit_action = create_action(move |_: &()| {
        let dashboard = controller.get_value();
        async move {
            let _ = dashboard.submit_leave().await;
        }
    });

    create_effect(move |loaded: Option<()>| {
        if loaded.is_none() {
            load_action.dispatch(());
        }
    });

    EmployeeDashboardViewModel {
        state,
        controller,
        load_action,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::LeaveStatus;
    use crate::pages::employee_dashboard::utils::{
        approved_leaves, pending_leaves, MISSING_LEAVE_FIELDS_MESSAGE,
    };
    use crate::state::session::{Role, SessionStore};
    use serde_json::json;

    fn dashboard(server: &MockServer) -> EmployeeDashboard {
        let ctx = SessionContext::new(SessionStore::in_memory());
        ctx.establish(Session::new("emp-token", Role::Employee, "7"))
            .unwrap();
        EmployeeDashboard::new(
            EmployeeRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                server.url(""),
            ))),
            ctx,
            Notifications::new(),
        )
    }

    fn history_json(entries: &[(&str, &str)]) -> serde_json::Value {
        json!(entries
            .iter()
            .map(|(id, status)| json!({
                "id": id,
                "fromDate": "2024-01-10",
                "toDate": "2024-01-12",
                "reason": "Family event",
                "status": status
            }))
            .collect::<Vec<_>>())
    }

    fn mock_profile(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/employee/7");
            then.status(200).json_body(json!({
                "Id": 7,
                "Name": "Sam",
                "Email": "sam@company.com",
                "Department": "Support",
                "Status": "AVAILABLE"
            }));
        });
    }

    #[tokio::test]
    async fn load_fetches_profile_then_history() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        mock_profile(&server);
        let history = history_json(&[("1", "PENDING"), ("2", "APPROVED")]);
        server.mock(move |when, then| {
            when.method(GET).path("/employee/leave/history/7");
            then.status(200).json_body(history);
        });
        let employee = dashboard(&server);

        employee.load().await.unwrap();

        let paths: Vec<String> = server.received().into_iter().map(|req| req.path).collect();
        assert_eq!(paths, vec!["/employee/7", "/employee/leave/history/7"]);
        assert_eq!(
            employee.state.profile.get_untracked().map(|p| p.display_name()),
            Some("Sam".to_string())
        );
        let history = employee.state.history.get_untracked();
        assert_eq!(pending_leaves(&history), 1);
        assert_eq!(approved_leaves(&history), 1);
        assert!(!employee.state.loading.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_profile_skips_history() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/employee/7");
            then.status(500).text_body("");
        });
        let employee = dashboard(&server);

        assert!(employee.load().await.is_err());

        assert_eq!(server.hits(GET, "/employee/leave/history/7"), 0);
        assert_eq!(
            employee.notifications.latest().map(|toast| toast.message),
            Some(PROFILE_LOAD_FAILED_MESSAGE.to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn submitting_leave_posts_three_fields_and_refetches() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/employee/leave/7");
            then.status(200).json_body(json!({ "message": "ok" }));
        });
        let history = history_json(&[("1", "PENDING")]);
        server.mock(move |when, then| {
            when.method(GET).path("/employee/leave/history/7");
            then.status(200).json_body(history);
        });
        let employee = dashboard(&server);
        employee.toggle_leave_form();
        let form = employee.state.form;
        form.from_date.set("2024-01-10".into());
        form.to_date.set("2024-01-12".into());
        form.reason.set("Family event".into());

        employee.submit_leave().await.unwrap();

        let post = server
            .received()
            .into_iter()
            .find(|req| req.method == POST)
            .unwrap();
        assert_eq!(post.path, "/employee/leave/7");
        assert_eq!(post.authorization.as_deref(), Some("Bearer emp-token"));
        assert_eq!(
            post.body,
            Some(json!({
                "fromDate": "2024-01-10",
                "toDate": "2024-01-12",
                "reason": "Family event"
            }))
        );
        assert!(form.from_date.get_untracked().is_empty());
        assert!(form.reason.get_untracked().is_empty());
        assert!(!employee.state.show_leave_form.get_untracked());
        assert_eq!(server.hits(GET, "/employee/leave/history/7"), 1);
        assert_eq!(
            employee.state.history.get_untracked()[0].status,
            LeaveStatus::Pending
        );
        assert_eq!(
            employee.notifications.latest().map(|toast| toast.message),
            Some(LEAVE_SUBMITTED_MESSAGE.to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn incomplete_leave_form_never_hits_network() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let employee = dashboard(&server);
        let form = employee.state.form;
        form.from_date.set("2024-01-10".into());
        form.reason.set("Family event".into());

        let err = employee.submit_leave().await.unwrap_err();

        assert_eq!(err.message, MISSING_LEAVE_FIELDS_MESSAGE);
        assert!(server.received().is_empty());
        assert_eq!(form.from_date.get_untracked(), "2024-01-10");
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_submission_keeps_form_and_shows_server_message() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/employee/leave/7");
            then.status(400).json_body(json!({ "message": "Overlapping leave" }));
        });
        let employee = dashboard(&server);
        employee.toggle_leave_form();
        let form = employee.state.form;
        form.from_date.set("2024-01-10".into());
        form.to_date.set("2024-01-12".into());
        form.reason.set("Family event".into());

        assert!(employee.submit_leave().await.is_err());

        assert!(employee.state.show_leave_form.get_untracked());
        assert_eq!(form.reason.get_untracked(), "Family event");
        assert_eq!(
            employee.notifications.latest().map(|toast| toast.message),
            Some("Overlapping leave".to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_token_ends_session() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/employee/7");
            then.status(403).json_body(json!("Forbidden"));
        });
        let employee = dashboard(&server);

        assert!(employee.load().await.unwrap_err().is_unauthorized());
        assert!(employee.ctx.current().is_none());
        assert!(employee.notifications.latest().is_none());
        runtime.dispose();
    }

    #[test]
    fn closing_form_resets_fields() {
        crate::test_support::ssr::with_runtime(|| {
            let server = MockServer::start();
            let employee = dashboard(&server);
            employee.toggle_leave_form();
            employee.state.form.reason.set("Trip".into());
            employee.toggle_leave_form();
            assert!(!employee.state.show_leave_form.get_untracked());
            assert!(employee.state.form.reason.get_untracked().is_empty());
        });
    }
}
