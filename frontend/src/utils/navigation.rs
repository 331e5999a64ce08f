/// Full-page navigation. Outside the browser this only logs the target.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    let result = crate::utils::storage::browser_window().and_then(|win| {
        win.location()
            .set_href(path)
            .map_err(|_| crate::api::ApiError::transport(format!("Failed to navigate to {}", path)))
    });
    if let Err(err) = result {
        log::error!("{}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(path: &str) {
    log::debug!("navigate_to({})", path);
}
