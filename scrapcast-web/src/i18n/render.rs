use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;

    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else {
        "other".to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|raw| raw.parse::<f64>().ok())?;
            let category = plural_category(lang, count);
            map.get(&category)
                .or_else(|| map.get("other"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language, falling back to English and
/// finally to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key and substitute `{name}` placeholders from `args`.
///
/// Keys holding an object are plural forms selected by the `count` argument.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        let value = serde_json::json!({
            "one": "{count} cenário salvo",
            "other": "{count} cenários salvos"
        });
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "pt", Some(&args)).unwrap(), "1 cenário salvo");
        args.insert("count", "3");
        assert_eq!(render_value(&value, "pt", Some(&args)).unwrap(), "3 cenários salvos");
        assert!(render_value(&value, "pt", None).is_none());
    }

    #[test]
    fn interpolation_replaces_every_occurrence() {
        let value = Value::String("{stage} / {stage}".into());
        let mut args = BTreeMap::new();
        args.insert("stage", "Prensa");
        assert_eq!(render_value(&value, "pt", Some(&args)).unwrap(), "Prensa / Prensa");
    }

    #[test]
    fn nested_lookup_walks_dotted_keys() {
        let value = serde_json::json!({ "a": { "b": { "c": "deep" } } });
        assert_eq!(get_nested_value(&value, "a.b.c"), Some(&Value::from("deep")));
        assert!(get_nested_value(&value, "a.x").is_none());
    }
}
