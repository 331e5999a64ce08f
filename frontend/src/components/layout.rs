use crate::state::auth::use_session;
use leptos::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center p-8 space-y-3">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {message.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Top bar shared by both dashboards.
#[component]
pub fn DashboardHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: MaybeSignal<String>,
) -> impl IntoView {
    let ctx = use_session();
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex justify-between items-center">
                <div>
                    <h1 class="text-xl font-semibold text-fg">{title}</h1>
                    <p class="text-sm text-fg-muted">{move || subtitle.get()}</p>
                </div>
                <button
                    type="button"
                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                    on:click=move |_| ctx.logout()
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{hr_session, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner message="Loading dashboard..." />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading dashboard..."));
        assert!(html.contains("ok"));
    }

    #[test]
    fn header_shows_title_and_logout() {
        let html = render_to_string(move || {
            provide_session(Some(hr_session()));
            view! { <DashboardHeader title="HR Dashboard" subtitle="hr@company.com" /> }
        });
        assert!(html.contains("HR Dashboard"));
        assert!(html.contains("hr@company.com"));
        assert!(html.contains("Logout"));
    }
}
