use crate::{
    api::ApiError,
    state::auth::{handle_auth_failure, SessionContext},
};
use leptos::*;
use uuid::Uuid;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient success/error messages shown on top of every page.
#[derive(Clone, Copy)]
pub struct Notifications {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn push_success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message.into())
    }

    pub fn push_error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.with_untracked(|toasts| toasts.last().cloned())
    }

    fn push(&self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        match kind {
            ToastKind::Success => log::info!("{}", message),
            ToastKind::Error => log::warn!("{}", message),
        }
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));
        self.schedule_dismiss(id);
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let this = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || this.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(provide_notifications)
}

/// Reports a failed dashboard operation: rejected credentials end the
/// session, anything else becomes an error toast. Returns the error for `?`.
pub fn notify_failure(
    ctx: SessionContext,
    notifications: Notifications,
    error: ApiError,
    fallback: &str,
) -> ApiError {
    report(ctx, notifications, error, fallback, |error| error.describe(fallback))
}

/// Like [`notify_failure`], but always shows `message` instead of whatever
/// the server sent.
pub fn notify_failure_verbatim(
    ctx: SessionContext,
    notifications: Notifications,
    error: ApiError,
    message: &str,
) -> ApiError {
    report(ctx, notifications, error, message, |_| message.to_string())
}

fn report(
    ctx: SessionContext,
    notifications: Notifications,
    error: ApiError,
    context: &str,
    text: impl FnOnce(&ApiError) -> String,
) -> ApiError {
    log::error!("{}: {}", context, error);
    if let Some(error) = handle_auth_failure(ctx, error.clone()) {
        notifications.push_error(text(&error));
    }
    error
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = use_notifications();
    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "bg-status-success-bg border border-status-success-border text-status-success-text",
                        ToastKind::Error => "bg-status-error-bg border border-status-error-border text-status-error-text",
                    };
                    view! {
                        <div class=format!("{} px-4 py-3 rounded shadow flex justify-between items-start", class) role="status">
                            <span>{toast.message}</span>
                            <button
                                class="ml-3 text-sm opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn push_and_dismiss_track_toasts() {
        with_runtime(|| {
            let notifications = Notifications::new();
            let first = notifications.push_success("Employee added successfully!");
            let second = notifications.push_error("Operation failed");
            assert_eq!(notifications.toasts.get_untracked().len(), 2);
            assert_eq!(
                notifications.latest().map(|toast| toast.kind),
                Some(ToastKind::Error)
            );

            notifications.dismiss(second);
            let remaining = notifications.toasts.get_untracked();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].id, first);
        });
    }

    #[test]
    fn use_notifications_shares_provided_context() {
        with_runtime(|| {
            let provided = provide_notifications();
            use_notifications().push_success("saved");
            assert_eq!(provided.toasts.get_untracked().len(), 1);
        });
    }

    #[test]
    fn notify_failure_toasts_or_logs_out() {
        use crate::state::session::{Role, Session, SessionStore};
        with_runtime(|| {
            let notifications = Notifications::new();
            let ctx = SessionContext::new(SessionStore::in_memory());
            ctx.establish(Session::new("tok", Role::Hr, "1")).unwrap();

            notify_failure(ctx, notifications, ApiError::from_response(500, ""), "Failed");
            assert_eq!(
                notifications.latest().map(|toast| toast.message),
                Some("Failed".to_string())
            );

            notify_failure(ctx, notifications, ApiError::from_response(401, ""), "Failed");
            assert_eq!(notifications.toasts.get_untracked().len(), 1);
            assert!(ctx.current().is_none());

            notify_failure_verbatim(
                ctx,
                notifications,
                ApiError::from_response(500, r#"{"message":"db down"}"#),
                "Failed to delete employee",
            );
            assert_eq!(
                notifications.latest().map(|toast| toast.message),
                Some("Failed to delete employee".to_string())
            );
        });
    }

    #[test]
    fn toast_stack_renders_messages() {
        let html = render_to_string(|| {
            let notifications = provide_notifications();
            notifications.push_success("Leave request submitted successfully!");
            view! { <ToastStack /> }
        });
        assert!(html.contains("Leave request submitted successfully!"));
    }
}
