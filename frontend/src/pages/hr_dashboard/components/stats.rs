use crate::{
    api::{Employee, LeaveRequest},
    components::cards::StatCard,
    pages::hr_dashboard::utils::pending_leave_count,
};
use leptos::*;

#[component]
pub fn HrStats(
    employees: Signal<Vec<Employee>>,
    leaves: Signal<Vec<LeaveRequest>>,
) -> impl IntoView {
    let total_employees = Signal::derive(move || employees.with(Vec::len));
    let pending = Signal::derive(move || leaves.with(|leaves| pending_leave_count(leaves)));
    let total_leaves = Signal::derive(move || leaves.with(Vec::len));
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <StatCard label="Total Employees" value=total_employees />
            <StatCard label="Pending Leaves" value=pending accent="text-status-warning-text" />
            <StatCard label="Total Leave Requests" value=total_leaves />
        </div>
    }
}
