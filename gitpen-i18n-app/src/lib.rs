//! Platform bootstrap for GitPen i18n.
//!
//! Provides `I18nApp` (service container + startup sequence), `I18nAppBuilder`
//! (adapter injection), `AppConfig` (TOML configuration) and the platform
//! adapters for the core traits.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use gitpen_i18n_core::catalog::Catalog;
use gitpen_i18n_core::error::{I18nError, I18nResult};
use gitpen_i18n_core::services::I18nService;
use gitpen_i18n_core::traits::{LanguageSource, PreferenceStore, StaticLanguageSource};
use gitpen_i18n_core::types::Locale;

use adapters::{normalize_posix_locale, JsonFilePreferenceStore, SystemLanguageSource};
pub use config::AppConfig;

/// Platform-agnostic application state.
///
/// Holds the i18n service and the host language signal. Every frontend
/// constructs this once at startup via `I18nAppBuilder`.
pub struct I18nApp {
    /// i18n service shared with the rest of the host
    pub service: Arc<I18nService>,
    /// Host language signal consulted when no valid preference is saved
    language_source: Arc<dyn LanguageSource>,
}

impl I18nApp {
    /// Run the startup sequence: load the saved preference, or detect and persist.
    pub fn run_startup(&self) -> Locale {
        let locale = self.service.init_from(self.language_source.as_ref());
        log::info!(
            "[i18n] Startup complete: locale {locale} ({})",
            locale.native_name()
        );
        locale
    }

    /// Host language as reported by the configured source.
    pub fn host_language(&self) -> Option<String> {
        self.language_source.language()
    }
}

/// Builder for constructing `I18nApp` with platform-specific adapters.
///
/// # Optional
/// - `store`: defaults to `JsonFilePreferenceStore` at the platform data directory
/// - `language_source`: defaults to `SystemLanguageSource`
/// - `catalog`: defaults to the built-in catalog
/// - `storage_key`: defaults to `LOCALE_STORAGE_KEY`
#[derive(Default)]
pub struct I18nAppBuilder {
    store: Option<Arc<dyn PreferenceStore>>,
    language_source: Option<Arc<dyn LanguageSource>>,
    catalog: Option<Arc<Catalog>>,
    storage_key: Option<String>,
}

impl I18nAppBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated from configuration.
    ///
    /// A configured `language` replaces the system language signal.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut builder = Self::new()
            .store(Arc::new(JsonFilePreferenceStore::new(config.store_path())))
            .storage_key(config.storage_key());

        if let Some(language) = &config.language {
            builder = builder.host_language(language);
        }
        builder
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn language_source(mut self, source: Arc<dyn LanguageSource>) -> Self {
        self.language_source = Some(source);
        self
    }

    /// Fixed host language tag (POSIX forms are normalized).
    #[must_use]
    pub fn host_language(self, tag: &str) -> Self {
        let source = normalize_posix_locale(tag)
            .map_or_else(StaticLanguageSource::empty, StaticLanguageSource::new);
        self.language_source(Arc::new(source))
    }

    #[must_use]
    pub fn catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Build the `I18nApp`.
    ///
    /// # Errors
    /// Returns `I18nError::ConfigError` if the storage key is empty.
    pub fn build(self) -> I18nResult<I18nApp> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(JsonFilePreferenceStore::default()));
        let language_source = self
            .language_source
            .unwrap_or_else(|| Arc::new(SystemLanguageSource::new()));
        let catalog = self
            .catalog
            .unwrap_or_else(Catalog::builtin_shared);

        let mut service = I18nService::with_catalog(store, catalog);
        if let Some(key) = self.storage_key {
            if key.trim().is_empty() {
                return Err(I18nError::ConfigError(
                    "storage key must not be empty".to_string(),
                ));
            }
            service = service.with_storage_key(key);
        }

        Ok(I18nApp {
            service: Arc::new(service),
            language_source,
        })
    }
}
