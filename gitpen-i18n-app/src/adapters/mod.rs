//! Platform adapters for the core traits.

mod json_file_store;
mod system_language;

pub use json_file_store::JsonFilePreferenceStore;
pub use system_language::{normalize_posix_locale, SystemLanguageSource};
