//! 欢迎文档
//!
//! 首次使用时创建的欢迎文件，按当前语言选择内容。

use crate::types::Locale;

const WELCOME_EN: &str = include_str!("welcome/en.md");
const WELCOME_JA: &str = include_str!("welcome/ja.md");
const WELCOME_ZH_TW: &str = include_str!("welcome/zh-TW.md");
const WELCOME_ZH_CN: &str = include_str!("welcome/zh-CN.md");

/// 获取指定语言的欢迎文档
pub fn welcome_document_for(locale: Locale) -> &'static str {
    match locale {
        Locale::En => WELCOME_EN,
        Locale::Ja => WELCOME_JA,
        Locale::ZhTw => WELCOME_ZH_TW,
        Locale::ZhCn => WELCOME_ZH_CN,
    }
}

/// 按语言代码获取欢迎文档，空值或不支持的代码回退到英文
pub fn welcome_document(code: Option<&str>) -> &'static str {
    code.and_then(Locale::from_code)
        .map_or(WELCOME_EN, welcome_document_for)
}
