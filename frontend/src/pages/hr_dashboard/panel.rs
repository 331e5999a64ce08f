use crate::{
    api::{EmployeeStatus, LeaveAction},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        layout::{DashboardHeader, LoadingSpinner},
    },
    pages::hr_dashboard::{
        components::{
            employee_form::EmployeeFormModal, employee_table::EmployeeTable,
            leave_table::LeaveTable, stats::HrStats,
        },
        utils::HrTab,
        view_model::use_hr_dashboard_view_model,
    },
};
use leptos::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg"
    } else {
        "px-4 py-2 text-sm font-medium text-fg-muted hover:text-fg"
    }
}

#[component]
pub fn HrDashboardPanel() -> impl IntoView {
    let vm = use_hr_dashboard_view_model();
    let state = vm.state;

    let employees = Signal::derive(move || state.employees.get());
    let leaves = Signal::derive(move || state.leaves.get());
    let updating = Signal::derive(move || state.updating.get());

    let on_status_change = Callback::new(move |(id, status): (String, EmployeeStatus)| {
        vm.status_action.dispatch((id, status))
    });
    let on_delete = Callback::new(move |id: String| vm.controller().request_delete(id));
    let on_leave_action = Callback::new(move |(id, action): (String, LeaveAction)| {
        vm.leave_action.dispatch((id, action))
    });
    let confirm_delete = Callback::new(move |_| vm.delete_action.dispatch(()));
    let cancel_delete = Callback::new(move |_| vm.controller().cancel_delete());
    let submit_employee = Callback::new(move |_| vm.create_employee_action.dispatch(()));
    let close_form = Callback::new(move |_| vm.controller().close_employee_form());

    view! {
        <div class="min-h-screen bg-surface">
            <DashboardHeader title="HR Dashboard" subtitle="Manage employees and leave requests" />
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                <Show
                    when=move || !state.loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading dashboard..." /> }
                >
                    <HrStats employees=employees leaves=leaves />
                    <div class="bg-surface-elevated shadow rounded-lg">
                        <div class="flex items-center justify-between border-b border-border px-4">
                            <nav class="flex">
                                <button
                                    type="button"
                                    class=move || tab_class(state.active_tab.get() == HrTab::Employees)
                                    on:click=move |_| state.active_tab.set(HrTab::Employees)
                                >
                                    {move || format!("Employees ({})", state.employees.with(Vec::len))}
                                </button>
                                <button
                                    type="button"
                                    class=move || tab_class(state.active_tab.get() == HrTab::Leaves)
                                    on:click=move |_| state.active_tab.set(HrTab::Leaves)
                                >
                                    {move || format!("Leave Requests ({})", state.leaves.with(Vec::len))}
                                </button>
                            </nav>
                            <Show when=move || state.active_tab.get() == HrTab::Employees fallback=|| ()>
                                <Button
                                    variant=ButtonVariant::Primary
                                    on:click=move |_| vm.controller().open_employee_form()
                                >
                                    "Add Employee"
                                </Button>
                            </Show>
                        </div>
                        <div class="p-4">
                            {move || match state.active_tab.get() {
                                HrTab::Employees => view! {
                                    <EmployeeTable
                                        employees=employees
                                        updating=updating
                                        on_status_change=on_status_change
                                        on_delete=on_delete
                                    />
                                }
                                .into_view(),
                                HrTab::Leaves => view! {
                                    <LeaveTable leaves=leaves updating=updating on_action=on_leave_action />
                                }
                                .into_view(),
                            }}
                        </div>
                    </div>
                </Show>
            </main>
            <EmployeeFormModal
                form=state.form
                open=Signal::derive(move || state.show_employee_form.get())
                submitting=Signal::derive(move || state.submitting.get())
                on_submit=submit_employee
                on_close=close_form
            />
            <ConfirmDialog
                is_open=Signal::derive(move || state.pending_delete.get().is_some())
                title="Delete Employee"
                message="Are you sure you want to delete this employee? This cannot be undone."
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                confirm_label="Delete"
                destructive=true
            />
        </div>
    }
}
