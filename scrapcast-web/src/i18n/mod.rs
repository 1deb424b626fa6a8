mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{DEFAULT_LANG, I18nBundle, LOCALE_STORAGE_KEY, current_lang, set_lang};
pub use format::{fmt_fixed, fmt_pct};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
