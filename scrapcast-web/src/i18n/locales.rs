use once_cell::sync::Lazy;
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "pt",
        name: "Português",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("pt", include_str!("../../i18n/pt.json")),
    ("en", include_str!("../../i18n/en.json")),
];

static PARSED: Lazy<Vec<(&'static str, Value)>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, data)| match serde_json::from_str(data) {
            Ok(value) => Some((*code, value)),
            Err(err) => {
                log::warn!("locale {code} failed to parse: {err}");
                None
            }
        })
        .collect()
});

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    PARSED
        .iter()
        .find_map(|(code, value)| (*code == lang).then(|| value.clone()))
}
