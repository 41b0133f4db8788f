//! 业务逻辑服务层

mod i18n_service;
mod locale_detection;

pub use i18n_service::{I18nService, LOCALE_STORAGE_KEY};
pub use locale_detection::{detect_browser_language, BROWSER_LANGUAGE_MAP};
