pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs logging and the panic hook, kicks off the
/// runtime config lookup and mounts the application.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting HR Module frontend (wasm)");

    // Resolve the API base URL up front so the first request does not pay for it.
    leptos::spawn_local(async move {
        let base_url = config::await_api_base_url().await;
        log::info!("Runtime config initialized (api_base_url={})", base_url);
    });

    router::mount_app();
}
