//! 语言代码和显示名称的对照表
//!
//! 正向表(代码 -> 名称)是唯一的数据来源，反向表由正向表按顺序反转得到，
//! 名称重复时后出现的代码生效。

use crate::Locale;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 自动检测，只能作为源语言
pub const AUTO: &str = "auto";
/// 找不到目标语言时使用的代码
pub const DEFAULT_TARGET: &str = "zh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name_zh: &'static str,
    pub name_en: &'static str,
}

impl Language {
    pub fn name(&self, locale: Locale) -> &'static str {
        locale.pick(self.name_zh, self.name_en)
    }
}

const fn lang(code: &'static str, name_zh: &'static str, name_en: &'static str) -> Language {
    Language {
        code,
        name_zh,
        name_en,
    }
}

// `zh_cht`和`cht`原本都显示为"繁体中文"，这里`cht`保留原名称
pub const LANGUAGES: &[Language] = &[
    lang("auto", "自动检测", "Auto Detect"),
    lang("zh", "中文", "Chinese"),
    lang("en", "英语", "English"),
    lang("jp", "日语", "Japanese"),
    lang("kor", "韩语", "Korean"),
    lang("fra", "法语", "French"),
    lang("de", "德语", "German"),
    lang("ru", "俄语", "Russian"),
    lang("spa", "西班牙语", "Spanish"),
    lang("pt", "葡萄牙语", "Portuguese"),
    lang("it", "意大利语", "Italian"),
    lang("vie", "越南语", "Vietnamese"),
    lang("th", "泰语", "Thai"),
    lang("ara", "阿拉伯语", "Arabic"),
    lang("hi", "印地语", "Hindi"),
    lang("yue", "粤语", "Cantonese"),
    lang("wyw", "文言文", "Classical Chinese"),
    lang("zh_cht", "繁体中文 (zh_cht)", "Traditional Chinese (zh_cht)"),
    lang("est", "爱沙尼亚语", "Estonian"),
    lang("bul", "保加利亚语", "Bulgarian"),
    lang("pl", "波兰语", "Polish"),
    lang("dan", "丹麦语", "Danish"),
    lang("fin", "芬兰语", "Finnish"),
    lang("nl", "荷兰语", "Dutch"),
    lang("cs", "捷克语", "Czech"),
    lang("swe", "瑞典语", "Swedish"),
    lang("hu", "匈牙利语", "Hungarian"),
    lang("el", "希腊语", "Greek"),
    lang("slo", "斯洛文尼亚语", "Slovenian"),
    lang("cht", "繁体中文", "Traditional Chinese"),
    lang("he", "希伯来语", "Hebrew"),
];

static CATALOG: LazyLock<LanguageCatalog> =
    LazyLock::new(|| LanguageCatalog::from_entries(LANGUAGES));

pub struct LanguageCatalog {
    entries: &'static [Language],
    by_code: HashMap<&'static str, Language>,
    by_name_zh: HashMap<&'static str, &'static str>,
    // key为小写的英文名称
    by_name_en: HashMap<String, &'static str>,
}

impl LanguageCatalog {
    /// 进程内共享的只读对照表，第一次使用时构建
    pub fn global() -> &'static LanguageCatalog {
        &CATALOG
    }

    pub fn from_entries(entries: &'static [Language]) -> Self {
        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_name_zh = HashMap::with_capacity(entries.len());
        let mut by_name_en = HashMap::with_capacity(entries.len());
        for l in entries {
            by_code.insert(l.code, *l);
            by_name_zh.insert(l.name_zh, l.code);
            by_name_en.insert(l.name_en.to_lowercase(), l.code);
        }
        Self {
            entries,
            by_code,
            by_name_zh,
            by_name_en,
        }
    }

    /// 按表中顺序返回所有语言，用于展示下拉列表等
    pub fn languages(&self) -> &'static [Language] {
        self.entries
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn display_name(&self, code: &str, locale: Locale) -> Option<&'static str> {
        self.by_code.get(code).map(|l| l.name(locale))
    }

    /// 显示名称 -> 代码，英文名称不区分大小写
    pub fn code_for(&self, name: &str, locale: Locale) -> Option<&'static str> {
        let name = name.trim();
        match locale {
            Locale::Zh => self.by_name_zh.get(name).copied(),
            Locale::En => self.by_name_en.get(&name.to_lowercase()).copied(),
        }
    }

    /// 接受语言代码或任意一种显示名称
    pub fn lookup(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        if let Some(l) = self.by_code.get(input) {
            return Some(l.code);
        }
        self.code_for(input, Locale::Zh)
            .or_else(|| self.code_for(input, Locale::En))
    }

    /// 找不到时使用`auto`
    pub fn resolve_source(&self, input: &str) -> &'static str {
        self.lookup(input).unwrap_or(AUTO)
    }

    /// 找不到时使用中文
    pub fn resolve_target(&self, input: &str) -> &'static str {
        self.lookup(input).unwrap_or(DEFAULT_TARGET)
    }
}
