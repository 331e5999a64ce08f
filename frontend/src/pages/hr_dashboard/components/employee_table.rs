use crate::{
    api::{Employee, EmployeeStatus},
    components::{
        common::{Button, ButtonSize, ButtonVariant},
        empty_state::EmptyState,
    },
};
use leptos::*;
use web_sys::HtmlSelectElement;

/// Status of one row as held in the employee list.
fn row_status(
    employees: Signal<Vec<Employee>>,
    id: String,
    fallback: EmployeeStatus,
) -> Signal<EmployeeStatus> {
    Signal::derive(move || {
        employees.with(|list| {
            list.iter()
                .find(|employee| employee.id == id)
                .map(|employee| employee.status)
                .unwrap_or(fallback)
        })
    })
}

/// The status to request for a select change, if it differs from `current`.
fn requested_status(current: EmployeeStatus, picked: &str) -> Option<EmployeeStatus> {
    EmployeeStatus::parse(picked).filter(|status| *status != current)
}

#[component]
pub fn EmployeeTable(
    employees: Signal<Vec<Employee>>,
    updating: Signal<bool>,
    on_status_change: Callback<(String, EmployeeStatus)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || employees.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No employees found" /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Department"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                            <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || employees.get()
                            key=|employee| (employee.id.clone(), employee.status)
                            children=move |employee| {
                                let id_for_status = employee.id.clone();
                                let id_for_delete = employee.id.clone();
                                let current = row_status(employees, employee.id.clone(), employee.status);
                                view! {
                                    <tr>
                                        <td class="px-4 py-3">
                                            <div class="flex items-center gap-3">
                                                <span class="h-8 w-8 rounded-full bg-surface-muted flex items-center justify-center font-semibold text-fg">
                                                    {employee.initial()}
                                                </span>
                                                <div>
                                                    <div class="text-sm font-medium text-fg">{employee.display_name()}</div>
                                                    <div class="text-xs text-fg-muted">{employee.email.clone()}</div>
                                                </div>
                                            </div>
                                        </td>
                                        <td class="px-4 py-3 text-sm text-fg">{employee.department_label()}</td>
                                        <td class="px-4 py-3">
                                            <select
                                                class="rounded-md border border-border px-2 py-1 text-sm"
                                                disabled=move || updating.get()
                                                prop:value=move || current.get().as_str()
                                                on:change=move |ev| {
                                                    let target = event_target::<HtmlSelectElement>(&ev);
                                                    let picked = requested_status(current.get_untracked(), &target.value());
                                                    // The list changes only once the server accepts the update.
                                                    target.set_value(current.get_untracked().as_str());
                                                    if let Some(status) = picked {
                                                        on_status_change.call((id_for_status.clone(), status));
                                                    }
                                                }
                                            >
                                                {EmployeeStatus::ALL
                                                    .into_iter()
                                                    .map(move |status| view! {
                                                        <option value=status.as_str() selected=move || status == current.get()>
                                                            {status.label()}
                                                        </option>
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td class="px-4 py-3 text-right">
                                            <Button
                                                variant=ButtonVariant::Danger
                                                size=ButtonSize::Small
                                                on:click=move |_| on_delete.call(id_for_delete.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
