use crate::{
    api::{LeaveAction, LeaveRequest},
    components::{
        common::{Badge, BadgeTone, Button, ButtonSize, ButtonVariant},
        empty_state::EmptyState,
    },
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn LeaveTable(
    leaves: Signal<Vec<LeaveRequest>>,
    updating: Signal<bool>,
    on_action: Callback<(String, LeaveAction)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || leaves.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No leave requests found" /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"From"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"To"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Reason"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                            <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || leaves.get()
                            key=|leave| (leave.id.clone(), leave.status)
                            children=move |leave| view! { <LeaveRow leave=leave updating=updating on_action=on_action /> }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn LeaveRow(
    leave: LeaveRequest,
    updating: Signal<bool>,
    on_action: Callback<(String, LeaveAction)>,
) -> impl IntoView {
    let actions = if !leave.status.is_terminal() {
        let approve_id = leave.id.clone();
        let reject_id = leave.id.clone();
        view! {
            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Success
                    size=ButtonSize::Small
                    disabled=updating
                    on:click=move |_| on_action.call((approve_id.clone(), LeaveAction::Approve))
                >
                    "Approve"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    size=ButtonSize::Small
                    disabled=updating
                    on:click=move |_| on_action.call((reject_id.clone(), LeaveAction::Reject))
                >
                    "Reject"
                </Button>
            </div>
        }
        .into_view()
    } else {
        view! { <span class="text-xs text-fg-muted">"No actions"</span> }.into_view()
    };

    view! {
        <tr>
            <td class="px-4 py-3 text-sm text-fg">{leave.employee_label()}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_display_date(leave.from_date.as_deref())}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_display_date(leave.to_date.as_deref())}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{leave.reason.clone().unwrap_or_default()}</td>
            <td class="px-4 py-3">
                <Badge tone=BadgeTone::from(leave.status) label=leave.status.as_str() />
            </td>
            <td class="px-4 py-3 text-right">{actions}</td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{LeaveEmployee, LeaveStatus};
    use crate::test_support::ssr::{escaped, render_to_string};

    fn leave(id: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            employee: Some(LeaveEmployee {
                name: Some("Ada".into()),
                email: None,
            }),
            from_date: Some("2024-01-10".into()),
            to_date: Some("2024-01-12".into()),
            reason: Some("Family event".into()),
            status,
        }
    }

    #[test]
    fn pending_rows_offer_actions_and_others_do_not() {
        let html = render_to_string(|| {
            let leaves = vec![leave("1", LeaveStatus::Pending), leave("2", LeaveStatus::Approved)];
            view! {
                <LeaveTable
                    leaves=Signal::derive(move || leaves.clone())
                    updating=Signal::derive(|| false)
                    on_action=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
        assert!(html.contains("No actions"));
        assert!(html.contains(&escaped("01/10/2024")));
        assert!(html.contains("Family event"));
    }

    #[test]
    fn decided_rows_have_no_buttons() {
        let html = render_to_string(|| {
            let leaves = vec![leave("3", LeaveStatus::Rejected), leave("4", LeaveStatus::Approved)];
            view! {
                <LeaveTable
                    leaves=Signal::derive(move || leaves.clone())
                    updating=Signal::derive(|| false)
                    on_action=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Approve"));
        assert!(!html.contains("Reject<"));
        assert_eq!(html.matches("No actions").count(), 2);
    }

    #[test]
    fn renders_empty_state() {
        let html = render_to_string(|| {
            view! {
                <LeaveTable
                    leaves=Signal::derive(Vec::new)
                    updating=Signal::derive(|| false)
                    on_action=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No leave requests found"));
    }
}
