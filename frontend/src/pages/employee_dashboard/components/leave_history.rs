use crate::{
    api::LeaveRequest,
    components::{
        common::{Badge, BadgeTone},
        empty_state::EmptyState,
    },
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn LeaveHistory(history: Signal<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold text-fg mb-4">"Leave History"</h3>
            <Show
                when=move || history.with(|list| !list.is_empty())
                fallback=|| view! { <EmptyState title="No leave requests yet" /> }
            >
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"From"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"To"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Reason"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || history.get()
                            key=|leave| (leave.id.clone(), leave.status)
                            children=|leave| view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm">{format_display_date(leave.from_date.as_deref())}</td>
                                    <td class="px-4 py-3 text-sm">{format_display_date(leave.to_date.as_deref())}</td>
                                    <td class="px-4 py-3 text-sm text-fg-muted">{leave.reason.clone().unwrap_or_default()}</td>
                                    <td class="px-4 py-3">
                                        <Badge tone=BadgeTone::from(leave.status) label=leave.status.as_str() />
                                    </td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
