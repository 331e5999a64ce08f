use crate::pages::employee_dashboard::utils::LeaveFormState;
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LeaveRequestForm(
    form: LeaveFormState,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <h3 class="text-lg font-semibold text-fg">"New Leave Request"</h3>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <div>
                    <label for="leave-from" class="block text-sm font-medium text-fg">"From"</label>
                    <input
                        id="leave-from"
                        type="date"
                        required
                        class="mt-1 block w-full rounded-md border border-border px-3 py-2"
                        prop:value=move || form.from_date.get()
                        on:input=move |ev| form.from_date.set(event_target::<HtmlInputElement>(&ev).value())
                    />
                </div>
                <div>
                    <label for="leave-to" class="block text-sm font-medium text-fg">"To"</label>
                    <input
                        id="leave-to"
                        type="date"
                        required
                        class="mt-1 block w-full rounded-md border border-border px-3 py-2"
                        prop:value=move || form.to_date.get()
                        on:input=move |ev| form.to_date.set(event_target::<HtmlInputElement>(&ev).value())
                    />
                </div>
            </div>
            <div>
                <label for="leave-reason" class="block text-sm font-medium text-fg">"Reason"</label>
                <textarea
                    id="leave-reason"
                    rows="3"
                    required
                    class="mt-1 block w-full rounded-md border border-border px-3 py-2"
                    prop:value=move || form.reason.get()
                    on:input=move |ev| form.reason.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="flex justify-end">
                <button
                    type="submit"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </div>
        </form>
    }
}
