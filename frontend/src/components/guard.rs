use crate::{
    router::AUTH_ROUTE,
    state::{auth::use_session, session::Session},
    utils::{navigation, time::now_unix_seconds},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// No usable session; leave for the auth page. `clear` is set when a
    /// stale session must be dropped first.
    Redirect { clear: bool },
}

pub fn guard_decision(session: Option<&Session>, now: i64) -> GuardDecision {
    match session {
        None => GuardDecision::Redirect { clear: false },
        Some(session) if session.is_expired(now) => GuardDecision::Redirect { clear: true },
        Some(_) => GuardDecision::Render,
    }
}

/// Renders its children only while a live session exists; otherwise sends the
/// browser back to the auth page and renders nothing.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_session();
    let decision = create_memo(move |_| {
        ctx.session
            .with(|session| guard_decision(session.as_ref(), now_unix_seconds()))
    });
    create_effect(move |_| {
        if let GuardDecision::Redirect { clear } = decision.get() {
            if clear {
                log::info!("Stored session has expired");
                ctx.expire();
            } else {
                navigation::navigate_to(AUTH_ROUTE);
            }
        }
    });
    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    fn token_expiring_at(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
        format!("e30.{}.sig", payload)
    }

    #[test]
    fn missing_session_redirects_without_clearing() {
        assert_eq!(
            guard_decision(None, 0),
            GuardDecision::Redirect { clear: false }
        );
    }

    #[test]
    fn live_session_renders() {
        let opaque = Session::new("opaque", Role::Hr, "1");
        assert_eq!(guard_decision(Some(&opaque), 10), GuardDecision::Render);

        let jwt = Session::new(token_expiring_at(100), Role::Employee, "2");
        assert_eq!(guard_decision(Some(&jwt), 99), GuardDecision::Render);
    }

    #[test]
    fn expired_session_is_cleared_and_redirected() {
        let jwt = Session::new(token_expiring_at(100), Role::Employee, "2");
        assert_eq!(
            guard_decision(Some(&jwt), 100),
            GuardDecision::Redirect { clear: true }
        );
    }
}
