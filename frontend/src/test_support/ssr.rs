use crate::{
    state::{notifications::provide_notifications, session::Session},
    test_support::helpers::provide_session,
};
use leptos::*;

/// Runs `f` inside a fresh reactive runtime, disposing it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders `view` with resources suppressed, so nothing leaves the
/// process while the markup is produced.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders a page the way the app shell would: a memory-backed session
/// context (logged in when `session` is set) plus the toast channel.
pub fn render_page<F, N>(session: Option<Session>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_session(session);
        provide_notifications();
        view()
    })
}

/// `text` as it appears in server-rendered markup, where `/` is written as
/// `&#x2F;`.
pub fn escaped(text: &str) -> String {
    text.replace('/', "&#x2F;")
}
