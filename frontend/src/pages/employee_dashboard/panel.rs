use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::{DashboardHeader, LoadingSpinner},
    },
    pages::employee_dashboard::{
        components::{
            leave_form::LeaveRequestForm, leave_history::LeaveHistory, profile_card::ProfileCard,
            stats::LeaveStats,
        },
        view_model::use_employee_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeeDashboardPanel() -> impl IntoView {
    let vm = use_employee_dashboard_view_model();
    let state = vm.state;

    let profile = Signal::derive(move || state.profile.get());
    let history = Signal::derive(move || state.history.get());
    let subtitle = Signal::derive(move || {
        state
            .profile
            .with(|profile| profile.as_ref().map(|p| format!("Welcome, {}", p.display_name())))
            .unwrap_or_else(|| "Employee Portal".to_string())
    });
    let submit = Callback::new(move |_| vm.submit_action.dispatch(()));

    view! {
        <div class="min-h-screen bg-surface">
            <DashboardHeader title="Employee Dashboard" subtitle=subtitle />
            <main class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                <Show
                    when=move || !state.loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading your dashboard..." /> }
                >
                    <ProfileCard profile=profile />
                    <LeaveStats history=history />
                    <div class="flex justify-end">
                        <Button
                            variant=ButtonVariant::Outline
                            on:click=move |_| vm.controller().toggle_leave_form()
                        >
                            {move || if state.show_leave_form.get() { "Cancel Request" } else { "Request Leave" }}
                        </Button>
                    </div>
                    <Show when=move || state.show_leave_form.get() fallback=|| ()>
                        <LeaveRequestForm
                            form=state.form
                            submitting=Signal::derive(move || state.submitting.get())
                            on_submit=submit
                        />
                    </Show>
                    <LeaveHistory history=history />
                </Show>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Employee, EmployeeStatus};
    use crate::test_support::helpers::employee_session;
    use crate::test_support::ssr::{render_page, render_to_string};

    #[test]
    fn renders_header_and_loading_state() {
        let html = render_page(Some(employee_session()), || view! { <EmployeeDashboardPanel /> });
        assert!(html.contains("Employee Dashboard"));
        assert!(html.contains("Loading your dashboard..."));
    }

    #[test]
    fn profile_card_shows_profile_fields() {
        let html = render_to_string(|| {
            let employee = Employee {
                id: "7".into(),
                name: Some("Sam".into()),
                email: "sam@company.com".into(),
                department: None,
                status: EmployeeStatus::Available,
            };
            view! { <ProfileCard profile=Signal::derive(move || Some(employee.clone())) /> }
        });
        assert!(html.contains("Sam"));
        assert!(html.contains("sam@company.com"));
        assert!(html.contains("Not Assigned"));
    }
}
