//! 翻译目录
//!
//! 每种语言一棵嵌套的 JSON 树，按 `.` 分隔的键路径查找（如 `common.cancel`）。
//! 英文目录是权威来源，其他语言可以缺少键，缺失时回退到英文，最后回退到键本身。

mod welcome;

pub use welcome::{welcome_document, welcome_document_for};

use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

use serde_json::Value;

use crate::error::{I18nError, I18nResult};
use crate::types::{Locale, DEFAULT_LOCALE};
use crate::utils::interpolate::interpolate;
use crate::utils::key_path::{get_nested_value, leaf_paths};

/// 内置翻译源（编译期嵌入）
const BUILTIN_SOURCES: [(Locale, &str); 4] = [
    (Locale::En, include_str!("locales/en.json")),
    (Locale::Ja, include_str!("locales/ja.json")),
    (Locale::ZhTw, include_str!("locales/zh-TW.json")),
    (Locale::ZhCn, include_str!("locales/zh-CN.json")),
];

/// 内置目录，首次使用时解析一次，所有服务共享同一份
static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| Arc::new(Catalog::load_builtin()));

/// 翻译目录（不可变）
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// 按 `Locale::index()` 排列的翻译树
    trees: [Value; 4],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalog {
    /// 获取内置目录
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// 获取内置目录的共享句柄（不复制翻译树）
    pub fn builtin_shared() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// 创建空目录（所有键都回退到键本身）
    #[must_use]
    pub fn empty() -> Self {
        Self {
            trees: std::array::from_fn(|_| Value::Object(serde_json::Map::new())),
        }
    }

    /// 从 JSON 文本构建目录
    ///
    /// 未提供的语言为空树。每个源的根必须是 JSON 对象。
    pub fn from_sources(sources: &[(Locale, &str)]) -> I18nResult<Self> {
        let mut catalog = Self::empty();
        for (locale, source) in sources {
            catalog.trees[locale.index()] = parse_tree(*locale, source)?;
        }
        Ok(catalog)
    }

    /// 从已解析的 JSON 树构建目录
    pub fn from_values(trees: impl IntoIterator<Item = (Locale, Value)>) -> Self {
        let mut catalog = Self::empty();
        for (locale, tree) in trees {
            catalog.trees[locale.index()] = tree;
        }
        catalog
    }

    fn load_builtin() -> Self {
        let mut catalog = Self::empty();
        for (locale, source) in BUILTIN_SOURCES {
            match parse_tree(locale, source) {
                Ok(tree) => catalog.trees[locale.index()] = tree,
                Err(e) => log::error!("[i18n] Failed to load built-in catalog: {e}"),
            }
        }
        catalog
    }

    /// 获取某语言的翻译树
    pub fn tree(&self, locale: Locale) -> &Value {
        &self.trees[locale.index()]
    }

    /// 在单个语言中解析键（只有字符串叶子才算解析成功）
    pub fn resolve(&self, locale: Locale, key: &str) -> Option<&str> {
        get_nested_value(self.tree(locale), key)?.as_str()
    }

    /// 解析键并应用回退链：指定语言 → 英文 → 键本身
    ///
    /// 参数插值只作用于解析到的模板，键本身原样返回。
    pub fn translate(&self, key: &str, locale: Locale, params: &[(&str, &str)]) -> String {
        if key.is_empty() {
            return String::new();
        }

        let resolved = self.resolve(locale, key).or_else(|| {
            if locale == DEFAULT_LOCALE {
                None
            } else {
                self.resolve(DEFAULT_LOCALE, key)
            }
        });

        match resolved {
            Some(template) => interpolate(template, params),
            None => {
                log::warn!("[i18n] Missing translation for key: {key}");
                key.to_string()
            }
        }
    }

    /// 列出某语言的所有键
    pub fn keys(&self, locale: Locale) -> Vec<String> {
        leaf_paths(self.tree(locale))
    }

    /// 英文中存在、但该语言缺失的键（由回退链兜底）
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let present: BTreeSet<String> = self.keys(locale).into_iter().collect();
        self.keys(DEFAULT_LOCALE)
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect()
    }

    /// 该语言中存在、但英文缺失的键（违反英文为超集的约定）
    pub fn extra_keys(&self, locale: Locale) -> Vec<String> {
        let authoritative: BTreeSet<String> = self.keys(DEFAULT_LOCALE).into_iter().collect();
        self.keys(locale)
            .into_iter()
            .filter(|key| !authoritative.contains(key))
            .collect()
    }
}

fn parse_tree(locale: Locale, source: &str) -> I18nResult<Value> {
    let tree: Value = serde_json::from_str(source).map_err(|e| I18nError::CatalogError {
        locale: locale.code().to_string(),
        message: e.to_string(),
    })?;
    if !tree.is_object() {
        return Err(I18nError::CatalogError {
            locale: locale.code().to_string(),
            message: "catalog root must be an object".to_string(),
        });
    }
    Ok(tree)
}
