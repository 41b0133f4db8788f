//! GitPen i18n Core Library
//!
//! Provides the locale resolution and translation logic of the GitPen editor, including:
//! - Browser language detection (four supported locales: en, ja, zh-TW, zh-CN)
//! - Validated, self-healing persistence of the user's locale preference
//! - Nested translation catalogs with the fallback chain current locale → en → key
//!
//! This library is designed to be platform-independent, abstracting the storage layer
//! and the host language signal through traits.

pub mod catalog;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::{welcome_document, Catalog};
pub use error::{I18nError, I18nResult};
pub use services::{detect_browser_language, I18nService, LOCALE_STORAGE_KEY};
pub use traits::{LanguageSource, MemoryPreferenceStore, PreferenceStore, StaticLanguageSource};
pub use types::{Locale, LocaleInfo, DEFAULT_LOCALE};
