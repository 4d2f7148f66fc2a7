//! Window navigation.

use crate::{AppError, AppResult};

/// Point the window at `url`; the browser handles the download.
pub fn navigate_to(url: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".into()))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| AppError::Browser(format!("Failed to navigate: {:?}", e)))
}
