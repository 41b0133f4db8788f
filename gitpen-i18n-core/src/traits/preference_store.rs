//! 偏好存储抽象 Trait

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{I18nError, I18nResult};

/// 偏好存储 Trait（类 localStorage 的字符串键值存储）
///
/// 平台实现:
/// - 内存: `MemoryPreferenceStore`（测试、无持久化的宿主）
/// - 桌面 / CLI: `JsonFilePreferenceStore`（gitpen-i18n-app，JSON 文件）
///
/// 所有方法均为同步调用，可能失败（配额、权限等）。
/// 调用方负责捕获错误，存储层本身不做任何值校验。
pub trait PreferenceStore: Send + Sync {
    /// 读取键对应的原始值
    ///
    /// # Returns
    /// * `Ok(Some(value))` - 值存在（可能是任意字符串，包括损坏数据）
    /// * `Ok(None)` - 值不存在
    fn get(&self, key: &str) -> I18nResult<Option<String>>;

    /// 写入键值（后写覆盖先写）
    ///
    /// # Arguments
    /// * `key` - 存储键
    /// * `value` - 原始字符串值
    fn set(&self, key: &str, value: &str) -> I18nResult<()>;

    /// 删除键（键不存在时视为成功）
    ///
    /// # Arguments
    /// * `key` - 存储键
    fn remove(&self, key: &str) -> I18nResult<()>;

    /// 清空全部键值
    fn clear(&self) -> I18nResult<()>;
}

/// 内存偏好存储
///
/// 默认实现，适用于所有平台。克隆后共享同一份数据。
#[derive(Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    /// 创建空的内存存储
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带初始值的内存存储
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// 当前条目数量
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> I18nError {
    I18nError::StorageError("memory store lock poisoned".to_string())
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> I18nResult<Option<String>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> I18nResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> I18nResult<()> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }

    fn clear(&self) -> I18nResult<()> {
        self.entries.write().map_err(poisoned)?.clear();
        Ok(())
    }
}
