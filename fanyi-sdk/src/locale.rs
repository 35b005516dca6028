use serde::Deserialize;

/// 提示信息和语言名称使用的语言
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 简体中文
    #[default]
    Zh,
    En,
}

impl Locale {
    /// 在中英文两个文案中选择一个
    pub(crate) fn pick<'a>(self, zh: &'a str, en: &'a str) -> &'a str {
        match self {
            Locale::Zh => zh,
            Locale::En => en,
        }
    }
}
