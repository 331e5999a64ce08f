use crate::{
    api::LeaveRequest,
    components::cards::StatCard,
    pages::employee_dashboard::utils::{approved_leaves, pending_leaves},
};
use leptos::*;

#[component]
pub fn LeaveStats(history: Signal<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <StatCard label="Total Requests" value=Signal::derive(move || history.with(Vec::len)) />
            <StatCard
                label="Pending"
                value=Signal::derive(move || history.with(|h| pending_leaves(h)))
                accent="text-status-warning-text"
            />
            <StatCard
                label="Approved"
                value=Signal::derive(move || history.with(|h| approved_leaves(h)))
                accent="text-status-success-text"
            />
        </div>
    }
}
