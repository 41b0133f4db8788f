//! 类型定义模块

mod locale;

pub use locale::{
    is_supported, validate_locale, validate_locale_value, Locale, LocaleInfo, DEFAULT_LOCALE,
    SUPPORTED_LOCALES,
};
