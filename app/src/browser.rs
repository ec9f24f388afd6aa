//! Browser history, storage, and scroll plumbing.
//!
//! The only module that touches `window` directly. Every function here
//! degrades to a no-op (or a sensible default) when the relevant API is
//! unavailable, so nothing in the app can fail on a missing browser
//! capability.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// Fixed navigation bar height subtracted from anchor scroll targets.
const NAV_OFFSET_PX: f64 = 90.0;

/// Session-storage key written by the static host's 404 redirect shim.
const REDIRECT_PATH_KEY: &str = "spaRedirectPath";

/// Initial path for the router.
///
/// A path stashed by a prior full-page redirect wins and is consumed on
/// read (read-once semantics); otherwise the live location is used.
pub fn initial_path() -> String {
    if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        if let Ok(Some(stored)) = storage.get_item(REDIRECT_PATH_KEY) {
            let _ = storage.remove_item(REDIRECT_PATH_KEY);
            return stored;
        }
    }
    current_location_path()
}

/// Pathname of the live location, without search or hash.
pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full path of the live location: pathname + search + hash.
pub fn current_location_path() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let location = window.location();
    format!(
        "{}{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default(),
        location.hash().unwrap_or_default()
    )
}

/// Push a history entry for `path` without reloading.
pub fn push_history(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Jump to the top of the page (no animation).
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        scroll_window(&window, 0.0, ScrollBehavior::Auto);
    }
}

/// Animate scroll to the in-page element a fragment link points at,
/// stopping [`NAV_OFFSET_PX`] short so the fixed nav bar never covers it.
///
/// Returns whether a scroll happened. Bare `#` and unknown targets are
/// left alone, so the caller can let the browser's default jump proceed.
pub fn scroll_to_fragment(fragment: &str) -> bool {
    let Some(id) = fragment_id(fragment) else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };
    let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or_default()
        - NAV_OFFSET_PX;
    scroll_window(&window, top, ScrollBehavior::Smooth);
    true
}

/// Element id a fragment link targets; `None` for bare `#` or empty input.
fn fragment_id(fragment: &str) -> Option<&str> {
    let id = fragment.trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

/// Whether the user asked the platform for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn scroll_window(window: &Window, top: f64, behavior: ScrollBehavior) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id_strips_hash() {
        assert_eq!(fragment_id("#profile"), Some("profile"));
        assert_eq!(fragment_id("blog"), Some("blog"));
    }

    #[test]
    fn test_bare_hash_has_no_target() {
        // no target means the default click behavior is never suppressed
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
    }
}
