#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::{
        auth::SessionContext,
        session::{Role, Session, SessionStore},
    };
    use leptos::*;

    pub fn hr_session() -> Session {
        Session::new("hr-token", Role::Hr, "1")
    }

    pub fn employee_session() -> Session {
        Session::new("emp-token", Role::Employee, "7")
    }

    /// Installs a session context backed by memory, optionally logged in.
    pub fn provide_session(session: Option<Session>) -> SessionContext {
        let store = SessionStore::in_memory();
        if let Some(session) = &session {
            store.write(session).expect("memory store");
        }
        let ctx = SessionContext::new(store);
        provide_context(ctx);
        ctx
    }
}
