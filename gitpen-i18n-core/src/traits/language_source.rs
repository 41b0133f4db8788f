//! Host language signal abstract Trait

/// Host Language Source Trait
///
/// Supplies the language tag reported by the host environment at startup
/// (browser `navigator.language`, POSIX locale variables, OS settings...).
///
/// Platform implementation:
/// - Fixed value: `StaticLanguageSource`
/// - Desktop / CLI: `SystemLanguageSource` (gitpen-i18n-app)
pub trait LanguageSource: Send + Sync {
    /// Reported language tag, `None` when the host has nothing to report
    fn language(&self) -> Option<String>;
}

/// Language source returning a fixed tag
#[derive(Debug, Clone, Default)]
pub struct StaticLanguageSource {
    tag: Option<String>,
}

impl StaticLanguageSource {
    /// Create a source that always reports `tag`
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }

    /// Create a source that reports nothing
    #[must_use]
    pub fn empty() -> Self {
        Self { tag: None }
    }
}

impl LanguageSource for StaticLanguageSource {
    fn language(&self) -> Option<String> {
        self.tag.clone()
    }
}
