//! Thin wrappers over browser globals.
//!
//! Every accessor returns an `Option` or `Result` so components can render
//! without a DOM (server-side rendering and native tests).

use crate::error::WebError;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Storage, Window};

/// The browser window; always `None` off the wasm target.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return err.message().into();
        }
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if there is no window or storage is disabled.
pub fn local_storage() -> Result<Storage, WebError> {
    window()
        .ok_or(WebError::NoWindow)?
        .local_storage()
        .map_err(|e| WebError::Storage(js_error_message(&e)))?
        .ok_or_else(|| WebError::Storage("localStorage unavailable".to_string()))
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = if now.is_finite() && now > 0.0 { now as u64 } else { 0 };
        ms
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Write text to the system clipboard.
///
/// # Errors
/// Returns an error if there is no window or the browser rejects the write.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_text(text: &str) -> Result<(), WebError> {
    let clipboard = window().ok_or(WebError::NoWindow)?.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| WebError::Clipboard(js_error_message(&e)))?;
    Ok(())
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}
