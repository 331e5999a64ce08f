use crate::pages::hr_dashboard::utils::EmployeeFormState;
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional, into)] input_type: Option<String>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type=input_type.unwrap_or_else(|| "text".to_string())
                required
                class="mt-1 block w-full rounded-md border border-border px-3 py-2 text-fg"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    value.set(target.value());
                }
            />
        </div>
    }
}

/// Modal form for adding an employee.
#[component]
pub fn EmployeeFormModal(
    form: EmployeeFormState,
    open: Signal<bool>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <div class="relative w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6" role="dialog" aria-modal="true">
                    <h2 class="text-lg font-semibold text-fg mb-4">"Add New Employee"</h2>
                    <form class="space-y-4" on:submit=handle_submit>
                        <FormField label="Full Name" id="employee-name" value=form.name />
                        <FormField label="Email" id="employee-email" input_type="email" value=form.email />
                        <FormField label="Password" id="employee-password" input_type="password" value=form.password />
                        <FormField label="Department" id="employee-department" value=form.department />
                        <div class="flex justify-end gap-2 pt-2">
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                                on:click=move |_| on_close.call(())
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Adding..." } else { "Add Employee" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
