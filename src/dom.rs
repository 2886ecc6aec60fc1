//! Browser Helpers
//!
//! Blocking dialogs and scroll navigation. No-ops off wasm so the crate
//! compiles for native test runs.

#[cfg(target_arch = "wasm32")]
pub fn alert(msg: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(msg);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn confirm(msg: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(msg).ok())
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        el.scroll_into_view();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_msg: &str) -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to(_element_id: &str) {}
