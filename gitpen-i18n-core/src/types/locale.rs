//! 语言（Locale）相关类型定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::I18nError;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// 英语（默认语言，翻译的权威来源）
    #[default]
    En,
    /// 日语
    Ja,
    /// 繁体中文
    ZhTw,
    /// 简体中文
    ZhCn,
}

/// 默认语言
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// 语言信息（供界面展示语言选择器）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    /// 语言代码
    pub code: &'static str,
    /// 英文名称
    pub name: &'static str,
    /// 本地名称（使用该语言本身的文字）
    pub native_name: &'static str,
}

/// 支持的语言列表（顺序即展示顺序）
pub static SUPPORTED_LOCALES: [LocaleInfo; 4] = [
    LocaleInfo {
        code: "en",
        name: "English",
        native_name: "English",
    },
    LocaleInfo {
        code: "ja",
        name: "Japanese",
        native_name: "日本語",
    },
    LocaleInfo {
        code: "zh-TW",
        name: "Traditional Chinese",
        native_name: "繁體中文",
    },
    LocaleInfo {
        code: "zh-CN",
        name: "Simplified Chinese",
        native_name: "简体中文",
    },
];

impl Locale {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ja, Locale::ZhTw, Locale::ZhCn]
    }

    /// 获取语言代码
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// 获取英文名称
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn native_name(self) -> &'static str {
        self.info().native_name
    }

    /// 获取语言信息
    pub fn info(self) -> &'static LocaleInfo {
        &SUPPORTED_LOCALES[self.index()]
    }

    /// 从语言代码解析（精确匹配，区分大小写）
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            "zh-TW" => Some(Locale::ZhTw),
            "zh-CN" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// 在支持列表中的位置
    pub(crate) fn index(self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ja => 1,
            Locale::ZhTw => 2,
            Locale::ZhCn => 3,
        }
    }

    /// 由位置还原语言
    pub(crate) fn from_index(index: usize) -> Option<Locale> {
        Locale::all().get(index).copied()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| I18nError::InvalidLocale(s.to_string()))
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let code = String::deserialize(deserializer)?;
        Locale::from_code(&code)
            .ok_or_else(|| Error::custom(format!("Unsupported locale: {code}")))
    }
}

/// 检查语言代码是否在支持列表中
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LOCALES.iter().any(|l| l.code == code)
}

/// 校验持久化的语言值
///
/// 去除首尾空白后必须非空，且原值必须与支持的语言代码完全一致（区分大小写）。
pub fn validate_locale(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    is_supported(value)
}

/// 校验任意 JSON 值：只有字符串才可能是合法语言
pub fn validate_locale_value(value: &serde_json::Value) -> bool {
    value.as_str().is_some_and(validate_locale)
}
