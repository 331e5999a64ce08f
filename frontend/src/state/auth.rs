use crate::{
    api::ApiError,
    router::AUTH_ROUTE,
    state::session::{Session, SessionStore},
    utils::navigation,
};
use leptos::*;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

/// Reactive view of the current session, backed by the durable store.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    store: StoredValue<SessionStore>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let initial = store.read();
        Self {
            session: create_rw_signal(initial),
            store: store_value(store),
        }
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn current(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    /// Session for an authenticated call, or an `Unauthorized` error when
    /// nobody is logged in.
    pub fn require(&self) -> Result<Session, ApiError> {
        self.current()
            .ok_or_else(|| ApiError::unauthorized("Not logged in"))
    }

    pub fn establish(&self, session: Session) -> Result<(), ApiError> {
        self.store.with_value(|store| store.write(&session))?;
        log::info!(
            "Session established for user {} ({})",
            session.user_id,
            session.role.as_str()
        );
        self.session.set(Some(session));
        Ok(())
    }

    /// Drops the persisted session and the in-memory copy.
    pub fn clear(&self) {
        self.store.with_value(|store| store.clear());
        self.session.set(None);
    }

    pub fn logout(&self) {
        log::info!("Logging out");
        self.clear();
        navigation::navigate_to(AUTH_ROUTE);
    }

    /// Ends a session the server (or its own expiry) no longer honours and
    /// leaves a notice for the auth page, since the redirect reloads the app.
    pub fn expire(&self) {
        log::warn!("Session expired or rejected; logging out");
        self.clear();
        if let Err(err) = self
            .store
            .with_value(|store| store.leave_notice(SESSION_EXPIRED_MESSAGE))
        {
            log::warn!("Could not keep the expiry notice: {}", err);
        }
        navigation::navigate_to(AUTH_ROUTE);
    }

    /// Notice left by [`SessionContext::expire`], consumed on read.
    pub fn take_notice(&self) -> Option<String> {
        self.store.with_value(|store| store.take_notice())
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new(SessionStore::from_environment()));
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(SessionStore::from_environment()))
}

/// Routes an error from an authenticated call: rejected credentials end the
/// session, anything else is handed back to the caller.
pub fn handle_auth_failure(ctx: SessionContext, error: ApiError) -> Option<ApiError> {
    if error.is_unauthorized() {
        ctx.expire();
        None
    } else {
        Some(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_session_without_provider_starts_logged_out() {
        with_runtime(|| {
            let ctx = use_session();
            assert!(ctx.current().is_none());
            assert!(ctx.require().unwrap_err().is_unauthorized());
        });
    }

    #[test]
    fn context_loads_persisted_session() {
        with_runtime(|| {
            let store = SessionStore::in_memory();
            let session = Session::new("tok", Role::Employee, "5");
            store.write(&session).unwrap();
            let ctx = SessionContext::new(store);
            assert_eq!(ctx.current(), Some(session));
        });
    }

    #[test]
    fn establish_persists_and_logout_clears_everything() {
        with_runtime(|| {
            let ctx = SessionContext::new(SessionStore::in_memory());
            ctx.establish(Session::new("tok", Role::Hr, "1")).unwrap();
            assert_eq!(ctx.store().read().map(|s| s.user_id), Some("1".to_string()));

            ctx.logout();
            assert!(ctx.current().is_none());
            assert!(ctx.take_notice().is_none());
            assert!(ctx.store().read().is_none());
            assert!(ctx.store().stored_role().is_none());
        });
    }

    #[test]
    fn unauthorized_errors_end_the_session() {
        with_runtime(|| {
            let ctx = SessionContext::new(SessionStore::in_memory());
            ctx.establish(Session::new("tok", Role::Hr, "1")).unwrap();

            let passed = handle_auth_failure(ctx, ApiError::from_response(500, ""));
            assert!(passed.is_some());
            assert!(ctx.current().is_some());

            let swallowed = handle_auth_failure(ctx, ApiError::from_response(401, ""));
            assert!(swallowed.is_none());
            assert!(ctx.current().is_none());
            assert_eq!(ctx.take_notice().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
            assert!(ctx.take_notice().is_none());
        });
    }
}
