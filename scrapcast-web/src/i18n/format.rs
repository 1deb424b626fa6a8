#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a number with exactly `digits` fraction digits.
///
/// In the browser the active locale picks the separators; elsewhere the
/// output uses `.` like `Number.prototype.toFixed`.
#[must_use]
pub fn fmt_fixed(num: f64, digits: usize) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = js_sys::Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let options = Object::new();
            let digits_js = JsValue::from_f64(digits as f64);
            let _ = Reflect::set(&options, &"minimumFractionDigits".into(), &digits_js);
            let _ = Reflect::set(&options, &"maximumFractionDigits".into(), &digits_js);
            let _ = Reflect::set(&options, &"useGrouping".into(), &JsValue::FALSE);
            let nf = Intl::NumberFormat::new(&locales, &options);
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| format!("{num:.digits$}"))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{num:.digits$}")
    }
}

/// Format a percentage value, `12.3456` with one digit becomes `12.3%`.
#[must_use]
pub fn fmt_pct(num: f64, digits: usize) -> String {
    format!("{}%", fmt_fixed(num, digits))
}
