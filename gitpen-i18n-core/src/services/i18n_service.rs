//! 国际化服务
//!
//! 负责语言偏好的加载、校验、持久化，以及翻译键的解析。

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::{welcome_document_for, Catalog};
use crate::services::locale_detection::detect_browser_language;
use crate::traits::{LanguageSource, PreferenceStore};
use crate::types::{self, Locale, LocaleInfo, DEFAULT_LOCALE, SUPPORTED_LOCALES};

/// 语言偏好的默认存储键
pub const LOCALE_STORAGE_KEY: &str = "gitpen-locale";

/// 未初始化标记
const UNINITIALIZED: u8 = u8::MAX;

/// 国际化服务
///
/// 持有当前语言（单写者原子单元）、翻译目录与偏好存储。
/// 平台层创建此服务并注入存储实现，通过 `Arc` 在调用方之间共享。
///
/// 语言切换在写锁内完成状态更新与持久化，并发切换时内存状态与存储保持一致。
pub struct I18nService {
    store: Arc<dyn PreferenceStore>,
    catalog: Arc<Catalog>,
    storage_key: String,
    current: AtomicU8,
    /// 串行化「更新状态 + 持久化」
    write_lock: Mutex<()>,
}

impl I18nService {
    /// 创建使用内置目录的服务实例
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_catalog(store, Catalog::builtin_shared())
    }

    /// 创建使用自定义目录的服务实例
    #[must_use]
    pub fn with_catalog(store: Arc<dyn PreferenceStore>, catalog: Arc<Catalog>) -> Self {
        Self {
            store,
            catalog,
            storage_key: LOCALE_STORAGE_KEY.to_string(),
            current: AtomicU8::new(UNINITIALIZED),
            write_lock: Mutex::new(()),
        }
    }

    /// 更换偏好存储键
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// 偏好存储键
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// 翻译目录
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ===== 生命周期 =====

    /// 初始化服务
    ///
    /// 1. 尝试加载已保存的语言；合法则直接采用（不检测、不写入）
    /// 2. 否则根据宿主语言标签检测，并设置和持久化检测结果
    pub fn init(&self, host_language: Option<&str>) -> Locale {
        self.init_with(|| host_language.map(str::to_string))
    }

    /// 使用宿主语言来源初始化服务
    ///
    /// 只有在没有合法的已保存语言时才会读取语言来源。
    pub fn init_from(&self, source: &dyn LanguageSource) -> Locale {
        self.init_with(|| source.language())
    }

    fn init_with(&self, host_language: impl FnOnce() -> Option<String>) -> Locale {
        if let Some(saved) = self.load_saved_locale() {
            let _guard = self.lock_writes();
            self.store_current(saved);
            log::debug!("[i18n] Using saved locale: {saved}");
            return saved;
        }

        let host_language = host_language();
        let detected = detect_browser_language(host_language.as_deref());
        log::info!(
            "[i18n] No valid saved locale, detected {detected} from host language {:?}",
            host_language.as_deref().unwrap_or_default()
        );
        self.apply_locale(detected);
        detected
    }

    /// 是否已经初始化
    pub fn is_initialized(&self) -> bool {
        self.current.load(Ordering::Acquire) != UNINITIALIZED
    }

    // ===== 当前语言 =====

    /// 获取当前语言（未初始化时为默认语言）
    pub fn current_locale(&self) -> Locale {
        Locale::from_index(usize::from(self.current.load(Ordering::Acquire)))
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// 获取当前语言信息
    pub fn current_locale_info(&self) -> &'static LocaleInfo {
        self.current_locale().info()
    }

    /// 支持的语言列表
    pub fn supported_locales(&self) -> &'static [LocaleInfo] {
        &SUPPORTED_LOCALES
    }

    /// 检查语言代码是否受支持
    pub fn is_supported(&self, code: &str) -> bool {
        types::is_supported(code)
    }

    /// 设置当前语言
    ///
    /// 不支持的代码：不修改状态、不持久化，返回 `false`。
    /// 支持的代码：更新状态并尝试持久化，无论持久化是否成功都返回 `true`。
    pub fn set_locale(&self, code: &str) -> bool {
        if !self.is_supported(code) {
            log::warn!("[i18n] Invalid locale: {code}");
            return false;
        }
        let Some(locale) = Locale::from_code(code) else {
            return false;
        };
        self.apply_locale(locale);
        true
    }

    fn apply_locale(&self, locale: Locale) {
        let _guard = self.lock_writes();
        self.store_current(locale);
        self.save_locale(locale);
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // 锁内无数据，忽略中毒
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store_current(&self, locale: Locale) {
        let index = u8::try_from(locale.index()).unwrap_or(UNINITIALIZED);
        self.current.store(index, Ordering::Release);
    }

    // ===== 偏好持久化 =====

    /// 加载已保存的语言
    ///
    /// 值不存在返回 `None`；值非法或存储读取失败时清除该键后返回 `None`。
    /// 错误不会传播给调用方。
    pub fn load_saved_locale(&self) -> Option<Locale> {
        match self.store.get(&self.storage_key) {
            Ok(None) => None,
            Ok(Some(saved)) => {
                if types::validate_locale(&saved) {
                    return Locale::from_code(&saved);
                }
                log::warn!(
                    "[i18n] Invalid saved locale: {saved:?}, clearing and falling back to host language detection"
                );
                self.clear_saved_locale();
                None
            }
            Err(e) => {
                log::warn!("[i18n] Failed to load saved locale: {e}");
                self.clear_saved_locale();
                None
            }
        }
    }

    /// 持久化语言，返回写入是否成功（失败只记录警告）
    pub fn save_locale(&self, locale: Locale) -> bool {
        match self.store.set(&self.storage_key, locale.code()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[i18n] Failed to save locale {locale}: {e}");
                false
            }
        }
    }

    /// 清除已保存的语言，返回是否成功
    pub fn clear_saved_locale(&self) -> bool {
        match self.store.remove(&self.storage_key) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[i18n] Failed to clear saved locale: {e}");
                false
            }
        }
    }

    // ===== 翻译 =====

    /// 使用当前语言翻译
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// 使用当前语言翻译并插值参数
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.catalog.translate(key, self.current_locale(), params)
    }

    /// 使用指定语言翻译
    pub fn translate(&self, key: &str, locale: Locale, params: &[(&str, &str)]) -> String {
        self.catalog.translate(key, locale, params)
    }

    /// 当前语言的欢迎文档
    pub fn welcome_document(&self) -> &'static str {
        welcome_document_for(self.current_locale())
    }
}
