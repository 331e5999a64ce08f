use crate::pages::auth::{
    components::{brand::BrandPanel, form::AuthForm},
    view_model::use_auth_view_model,
};
use leptos::*;

#[component]
pub fn AuthPanel() -> impl IntoView {
    let (vm, submit) = use_auth_view_model();
    let switch_mode = Callback::new(move |_| vm.toggle_mode());

    view! {
        <div class="min-h-screen flex bg-surface">
            <BrandPanel mode=vm.mode.into() on_switch=switch_mode />
            <div class="flex flex-1 items-center justify-center px-4 py-12 sm:px-6 lg:px-8">
                <AuthForm vm=vm on_submit=submit />
            </div>
        </div>
    }
}
