//! 浏览器语言检测
//!
//! 将任意 BCP 47 风格的语言标签映射到支持的语言：
//! - zh-CN, zh-Hans, zh → zh-CN
//! - zh-TW, zh-HK, zh-Hant → zh-TW
//! - ja, ja-JP → ja
//! - 其他 → en

use crate::types::{Locale, DEFAULT_LOCALE};

/// 浏览器语言标签 → 支持语言（精确匹配表）
pub const BROWSER_LANGUAGE_MAP: [(&str, Locale); 8] = [
    ("zh-CN", Locale::ZhCn),
    ("zh-Hans", Locale::ZhCn),
    ("zh", Locale::ZhCn),
    ("zh-TW", Locale::ZhTw),
    ("zh-HK", Locale::ZhTw),
    ("zh-Hant", Locale::ZhTw),
    ("ja", Locale::Ja),
    ("ja-JP", Locale::Ja),
];

fn lookup(tag: &str) -> Option<Locale> {
    BROWSER_LANGUAGE_MAP
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, locale)| *locale)
}

/// 检测浏览器语言并映射到支持的语言
///
/// 规则按顺序匹配，命中即返回；纯函数，对任意输入都返回支持的语言。
pub fn detect_browser_language(tag: Option<&str>) -> Locale {
    let tag = match tag {
        Some(tag) if !tag.is_empty() => tag,
        _ => return DEFAULT_LOCALE,
    };

    // 1. 精确匹配
    if let Some(locale) = lookup(tag) {
        return locale;
    }

    // 2. 繁体中文（Hant 脚本或台湾/香港地区）
    if tag.contains("Hant") || tag.starts_with("zh-TW") || tag.starts_with("zh-HK") {
        return Locale::ZhTw;
    }

    // 3. 简体中文（Hans 脚本或中国大陆地区）
    if tag.contains("Hans") || tag.starts_with("zh-CN") {
        return Locale::ZhCn;
    }

    // 4. 主语言子标签（如 'zh' from 'zh-SG'）
    let primary = tag.split('-').next().unwrap_or(tag);
    if let Some(locale) = lookup(primary) {
        return locale;
    }

    // 5. 日语前缀
    if tag.starts_with("ja") {
        return Locale::Ja;
    }

    DEFAULT_LOCALE
}
