use crate::api::Employee;
use leptos::*;

#[component]
pub fn ProfileCard(profile: Signal<Option<Employee>>) -> impl IntoView {
    let field = move |read: fn(&Employee) -> String| {
        move || {
            profile.with(|profile| profile.as_ref().map(read).unwrap_or_else(|| "N/A".into()))
        }
    };
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <div class="flex items-center gap-4">
                <span class="h-12 w-12 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center text-xl font-bold">
                    {move || profile.with(|p| p.as_ref().map(Employee::initial).unwrap_or_default())}
                </span>
                <div>
                    <h2 class="text-lg font-semibold text-fg">{field(Employee::display_name)}</h2>
                    <p class="text-sm text-fg-muted">{field(|p| p.email.clone())}</p>
                </div>
            </div>
            <dl class="mt-4 grid grid-cols-2 gap-4">
                <div>
                    <dt class="text-sm font-medium text-fg-muted">"Employee ID"</dt>
                    <dd class="mt-1 text-sm text-fg">{field(|p| p.id.clone())}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-fg-muted">"Department"</dt>
                    <dd class="mt-1 text-sm text-fg">{field(Employee::department_label)}</dd>
                </div>
            </dl>
        </div>
    }
}
