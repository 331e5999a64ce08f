use crate::api::ApiError;
use web_sys::{Storage, Window};

pub fn browser_window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::storage("Browser window is unavailable"))
}

/// `window.localStorage`, which browsers may withhold (private mode, disabled
/// cookies) or refuse outright.
pub fn local_storage() -> Result<Storage, ApiError> {
    match browser_window()?.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(ApiError::storage("localStorage is disabled")),
        Err(_) => Err(ApiError::storage("localStorage access was denied")),
    }
}
