//! CMS configuration loading from the host page.

use folio_core::CmsConfig;
use wasm_bindgen::JsValue;

/// Global the deployer's `config.js` assigns on `window`.
const CONFIG_GLOBAL: &str = "CMS_CONFIG";

/// Reads `window.CMS_CONFIG` and merges it over the defaults.
///
/// An absent global or one that fails to deserialize yields the plain
/// defaults: a misconfigured page degrades to bundled content rather
/// than failing.
pub fn from_window() -> CmsConfig {
    let Some(window) = web_sys::window() else {
        return CmsConfig::default();
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return CmsConfig::default();
    };
    if value.is_undefined() || value.is_null() {
        return CmsConfig::default();
    }
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|err| {
        log::warn!("ignoring malformed {CONFIG_GLOBAL}: {err}");
        CmsConfig::default()
    })
}
