use crate::{
    components::{error::InlineErrorMessage, layout::SuccessMessage},
    pages::auth::{
        utils::{form_heading, submit_label, FALLBACK_ERROR_MESSAGE},
        view_model::AuthViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn AuthForm(vm: AuthViewModel, on_submit: Callback<()>) -> impl IntoView {
    let pending = Signal::derive(move || vm.state.get().is_submitting());
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="w-full max-w-md space-y-6">
            <div>
                <h2 class="text-3xl font-extrabold text-fg">
                    {move || form_heading(vm.mode.get(), vm.is_signup.get())}
                </h2>
                <button
                    type="button"
                    class="mt-2 text-sm text-action-primary-bg hover:underline lg:hidden"
                    on:click=move |_| vm.toggle_mode()
                >
                    {move || vm.mode.get().switch_label()}
                </button>
            </div>
            <InlineErrorMessage error=Signal::derive(move || vm.failure()) fallback=FALLBACK_ERROR_MESSAGE />
            {move || vm.success.get().map(|message| view! { <SuccessMessage message=message /> })}
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required
                        class="mt-1 block w-full rounded-md border border-border px-3 py-2 text-fg"
                        placeholder="you@company.com"
                        prop:value=move || vm.email.get()
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            vm.email.set(target.value());
                        }
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required
                        class="mt-1 block w-full rounded-md border border-border px-3 py-2 text-fg"
                        prop:value=move || vm.password.get()
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            vm.password.set(target.value());
                        }
                    />
                </div>
                <button
                    type="submit"
                    class="w-full inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || {
                        if pending.get() {
                            "Please wait...".to_string()
                        } else {
                            submit_label(vm.mode.get(), vm.is_signup.get()).to_string()
                        }
                    }}
                </button>
            </form>
            <Show when=move || vm.mode.get().allows_signup() fallback=|| ()>
                <p class="text-center text-sm text-fg-muted">
                    {move || if vm.is_signup.get() { "Already have an account? " } else { "Don't have an account? " }}
                    <button
                        type="button"
                        class="font-semibold text-action-primary-bg hover:underline"
                        on:click=move |_| vm.toggle_signup()
                    >
                        {move || if vm.is_signup.get() { "Login" } else { "Sign up" }}
                    </button>
                </p>
            </Show>
        </div>
    }
}
