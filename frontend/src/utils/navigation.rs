pub const LOGIN_ROUTE: &str = "/login";

/// Full-page navigation that keeps the current entry in history.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

/// Full-page navigation that replaces the current history entry.
#[cfg(target_arch = "wasm32")]
pub fn replace_with(path: &str) {
    if let Some(win) = web_sys::window() {
        let location = win.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        let _ = location.replace(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(path: &str) {
    log::debug!("navigate_to({}) skipped outside the browser", path);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_with(path: &str) {
    log::debug!("replace_with({}) skipped outside the browser", path);
}
