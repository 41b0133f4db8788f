//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;

use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use crate::services::I18nService;
use crate::traits::{LanguageSource, MemoryPreferenceStore, PreferenceStore};
use crate::types::Locale;

// ===== FailingPreferenceStore =====

/// 哪些操作失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// 读取失败（如 SecurityError）
    Reads,
    /// 写入失败（如 QuotaExceededError）
    Writes,
    /// 全部失败（存储不可用）
    Everything,
}

pub struct FailingPreferenceStore {
    mode: FailureMode,
    remove_attempts: AtomicUsize,
}

impl FailingPreferenceStore {
    pub fn new(mode: FailureMode) -> Self {
        Self {
            mode,
            remove_attempts: AtomicUsize::new(0),
        }
    }

    pub fn remove_attempts(&self) -> usize {
        self.remove_attempts.load(Ordering::SeqCst)
    }

    fn fail(&self, op: &str) -> I18nError {
        I18nError::StorageError(format!("{op} failed ({:?})", self.mode))
    }
}

impl PreferenceStore for FailingPreferenceStore {
    fn get(&self, _key: &str) -> I18nResult<Option<String>> {
        match self.mode {
            FailureMode::Writes => Ok(None),
            FailureMode::Reads | FailureMode::Everything => Err(self.fail("get")),
        }
    }

    fn set(&self, _key: &str, _value: &str) -> I18nResult<()> {
        match self.mode {
            FailureMode::Reads => Ok(()),
            FailureMode::Writes | FailureMode::Everything => Err(self.fail("set")),
        }
    }

    fn remove(&self, _key: &str) -> I18nResult<()> {
        self.remove_attempts.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            FailureMode::Reads | FailureMode::Writes => Ok(()),
            FailureMode::Everything => Err(self.fail("remove")),
        }
    }

    fn clear(&self) -> I18nResult<()> {
        match self.mode {
            FailureMode::Everything => Err(self.fail("clear")),
            FailureMode::Reads | FailureMode::Writes => Ok(()),
        }
    }
}

// ===== 计数实现 =====

/// 记录写入次数的内存存储
pub struct CountingPreferenceStore {
    inner: MemoryPreferenceStore,
    sets: AtomicUsize,
}

impl CountingPreferenceStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryPreferenceStore::with_entry(key, value),
            sets: AtomicUsize::new(0),
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

impl PreferenceStore for CountingPreferenceStore {
    fn get(&self, key: &str) -> I18nResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> I18nResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> I18nResult<()> {
        self.inner.remove(key)
    }

    fn clear(&self) -> I18nResult<()> {
        self.inner.clear()
    }
}

/// 记录调用次数的语言来源
pub struct CountingLanguageSource {
    tag: String,
    calls: AtomicUsize,
}

impl CountingLanguageSource {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LanguageSource for CountingLanguageSource {
    fn language(&self) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(self.tag.clone())
    }
}

// ===== 工厂方法 =====

/// 测试用翻译目录
///
/// `common.missingInOthers` 与 `nested.deep.key` 只存在于英文中。
pub fn test_catalog() -> Catalog {
    Catalog::from_values([
        (
            Locale::En,
            json!({
                "common": {
                    "cancel": "Cancel",
                    "confirm": "Confirm",
                    "close": "Close",
                    "save": "Save",
                    "delete": "Delete",
                    "missingInOthers": "Only in English"
                },
                "navigation": {
                    "toggleExplorer": "Toggle Explorer",
                    "toggleSideBar": "Toggle Side Bar"
                },
                "nested": { "deep": { "key": "Deep nested value" } },
                "greeting": { "hello": "Hello, {name}!" }
            }),
        ),
        (
            Locale::ZhCn,
            json!({
                "common": {
                    "cancel": "取消",
                    "confirm": "确认",
                    "close": "关闭",
                    "save": "保存",
                    "delete": "删除"
                },
                "navigation": {
                    "toggleExplorer": "切换资源管理器",
                    "toggleSideBar": "切换侧边栏"
                },
                "greeting": { "hello": "你好，{name}！" }
            }),
        ),
        (
            Locale::Ja,
            json!({
                "common": {
                    "cancel": "キャンセル",
                    "confirm": "確認",
                    "close": "閉じる",
                    "save": "保存",
                    "delete": "削除"
                },
                "navigation": {
                    "toggleExplorer": "エクスプローラーの切り替え",
                    "toggleSideBar": "サイドバーの切り替え"
                }
            }),
        ),
        (
            Locale::ZhTw,
            json!({
                "common": {
                    "cancel": "取消",
                    "confirm": "確認",
                    "close": "關閉",
                    "save": "儲存",
                    "delete": "刪除"
                },
                "navigation": {
                    "toggleExplorer": "切換資源管理器",
                    "toggleSideBar": "切換側邊欄"
                }
            }),
        ),
    ])
}

/// 创建测试用 `I18nService`（空内存存储）
pub fn create_test_service() -> (I18nService, Arc<MemoryPreferenceStore>) {
    create_test_service_with(MemoryPreferenceStore::new())
}

/// 使用给定内存存储创建测试用 `I18nService`
pub fn create_test_service_with(
    store: MemoryPreferenceStore,
) -> (I18nService, Arc<MemoryPreferenceStore>) {
    let store = Arc::new(store);
    let service = I18nService::with_catalog(store.clone(), Arc::new(test_catalog()));
    (service, store)
}
