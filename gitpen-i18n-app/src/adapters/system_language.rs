//! Host language signal from the environment and the operating system.

use gitpen_i18n_core::traits::LanguageSource;

/// Variables that determine the effective message locale, highest precedence first.
const MESSAGE_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// What the environment says about the message language.
#[derive(Debug, PartialEq, Eq)]
enum EnvLanguage {
    /// A usable language tag
    Tag(String),
    /// The effective locale is `C`/`POSIX`: messages stay untranslated
    Untranslated,
    /// No locale variable is set
    Unset,
}

/// Language source reading POSIX locale variables, then the OS locale.
///
/// Precedence follows glibc:
/// - The effective locale is the first non-empty value of `LC_ALL`,
///   `LC_MESSAGES` or `LANG`. A set `LC_ALL` overrides the other two.
/// - When the effective locale is `C`/`POSIX`, `LANGUAGE` is ignored and no
///   tag is reported. The OS locale is not consulted either.
/// - Otherwise the first usable entry of the colon-separated `LANGUAGE` list
///   wins, then the effective locale.
///
/// If no locale variable is set at all, `LANGUAGE` is still honored (glibc
/// would ignore it), then the OS locale is used.
///
/// POSIX values such as `zh_TW.UTF-8` are normalized to `zh-TW` so the core
/// detector sees BCP 47 style tags.
pub struct SystemLanguageSource {
    env: EnvLookup,
    os_fallback: bool,
}

impl SystemLanguageSource {
    /// Read the process environment, falling back to the OS locale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: Box::new(|name| std::env::var(name).ok()),
            os_fallback: true,
        }
    }

    /// Use a custom environment lookup (tests, sandboxed hosts).
    #[must_use]
    pub fn with_env(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            env: Box::new(lookup),
            os_fallback: true,
        }
    }

    /// Do not consult the OS locale when no variable is set.
    #[must_use]
    pub fn without_os_fallback(mut self) -> Self {
        self.os_fallback = false;
        self
    }

    fn var(&self, name: &str) -> Option<String> {
        (self.env)(name).filter(|value| !value.trim().is_empty())
    }

    fn from_env(&self) -> EnvLanguage {
        let effective = MESSAGE_LOCALE_VARS.iter().find_map(|name| self.var(name));
        let effective_tag = match &effective {
            Some(value) => match normalize_posix_locale(value) {
                Some(tag) => Some(tag),
                None => return EnvLanguage::Untranslated,
            },
            None => None,
        };

        let from_language_list = self
            .var("LANGUAGE")
            .and_then(|list| list.split(':').find_map(normalize_posix_locale));

        match from_language_list.or(effective_tag) {
            Some(tag) => EnvLanguage::Tag(tag),
            None => EnvLanguage::Unset,
        }
    }
}

impl Default for SystemLanguageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSource for SystemLanguageSource {
    fn language(&self) -> Option<String> {
        match self.from_env() {
            EnvLanguage::Tag(tag) => {
                log::debug!("[i18n] Host language from environment: {tag}");
                Some(tag)
            }
            EnvLanguage::Untranslated => {
                log::debug!("[i18n] Effective locale is C/POSIX, no host language");
                None
            }
            EnvLanguage::Unset if self.os_fallback => {
                let tag = sys_locale::get_locale();
                log::debug!("[i18n] Host language from OS: {tag:?}");
                tag
            }
            EnvLanguage::Unset => None,
        }
    }
}

/// Convert a POSIX locale (`ll_CC.codeset@modifier`) to a BCP 47 style tag.
///
/// Returns `None` for empty values and the `C`/`POSIX` locales.
pub fn normalize_posix_locale(value: &str) -> Option<String> {
    let value = value.trim();
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or(value)
        .trim();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(vars: &[(&str, &str)]) -> SystemLanguageSource {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SystemLanguageSource::with_env(move |name| vars.get(name).cloned()).without_os_fallback()
    }

    #[test]
    fn normalizes_posix_forms() {
        assert_eq!(normalize_posix_locale("zh_TW.UTF-8").as_deref(), Some("zh-TW"));
        assert_eq!(normalize_posix_locale("ja_JP").as_deref(), Some("ja-JP"));
        assert_eq!(normalize_posix_locale("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(normalize_posix_locale("zh-Hant-HK").as_deref(), Some("zh-Hant-HK"));
        assert_eq!(normalize_posix_locale("C"), None);
        assert_eq!(normalize_posix_locale("C.UTF-8"), None);
        assert_eq!(normalize_posix_locale("POSIX"), None);
        assert_eq!(normalize_posix_locale(""), None);
    }

    #[test]
    fn language_list_takes_first_usable_entry() {
        let src = source(&[("LANGUAGE", "zh_CN:en_US"), ("LANG", "ja_JP.UTF-8")]);
        assert_eq!(src.language().as_deref(), Some("zh-CN"));

        let src = source(&[("LANGUAGE", ":C:ja"), ("LANG", "en_US.UTF-8")]);
        assert_eq!(src.language().as_deref(), Some("ja"));
    }

    #[test]
    fn lc_all_overrides_later_variables() {
        let src = source(&[("LC_ALL", "zh_TW.UTF-8"), ("LANG", "en_US.UTF-8")]);
        assert_eq!(src.language().as_deref(), Some("zh-TW"));

        let src = source(&[("LC_MESSAGES", "ja_JP"), ("LANG", "en_US")]);
        assert_eq!(src.language().as_deref(), Some("ja-JP"));

        let src = source(&[("LC_ALL", ""), ("LC_MESSAGES", "ja_JP"), ("LANG", "en_US")]);
        assert_eq!(src.language().as_deref(), Some("ja-JP"));
    }

    #[test]
    fn c_locale_suppresses_every_signal() {
        let src = source(&[("LC_ALL", "C"), ("LC_MESSAGES", "ja_JP"), ("LANG", "en_US")]);
        assert_eq!(src.language(), None);

        let src = source(&[("LANGUAGE", "ja"), ("LANG", "C.UTF-8")]);
        assert_eq!(src.language(), None);

        // C/POSIX also keeps the OS locale out
        let src = SystemLanguageSource::with_env(|name| (name == "LANG").then(|| "POSIX".to_string()));
        assert_eq!(src.from_env(), EnvLanguage::Untranslated);
        assert_eq!(src.language(), None);
    }

    #[test]
    fn language_list_applies_without_locale_variables() {
        assert_eq!(source(&[("LANGUAGE", "zh_TW")]).language().as_deref(), Some("zh-TW"));
        assert_eq!(source(&[]).language(), None);
        assert_eq!(source(&[]).from_env(), EnvLanguage::Unset);
    }
}
