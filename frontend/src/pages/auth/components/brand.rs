use crate::pages::auth::utils::PortalMode;
use leptos::*;

#[component]
pub fn BrandPanel(mode: Signal<PortalMode>, on_switch: Callback<()>) -> impl IntoView {
    view! {
        <div class="hidden lg:flex lg:w-1/2 flex-col justify-between bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse p-12">
            <div class="text-2xl font-bold">"HR Module"</div>
            <div class="space-y-4">
                <h1 class="text-4xl font-extrabold">{move || mode.get().brand_headline()}</h1>
                <p class="text-lg opacity-90">{move || mode.get().brand_tagline()}</p>
            </div>
            <button
                type="button"
                class="self-start rounded-md border border-current px-4 py-2 text-sm font-semibold hover:opacity-90"
                on:click=move |_| on_switch.call(())
            >
                {move || mode.get().switch_label()}
            </button>
        </div>
    }
}
