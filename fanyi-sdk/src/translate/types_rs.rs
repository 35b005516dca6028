use crate::Locale;
use crate::translate::{Client, Error, ErrorKind};
use bon::Builder;
use serde::{Deserialize, Deserializer};

// region    --- translate
#[derive(Builder)]
pub struct Translate<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    /// 待翻译的文本，需要调用方自己保证非空
    pub(crate) query: &'a str,
    /// 源语言代码，`auto`为自动检测
    #[builder(default = "auto")]
    pub(crate) from: &'a str,
    /// 目标语言代码，不可以为`auto`
    pub(crate) to: &'a str,
}

/// 实际发送的query参数，`pairs`的顺序即参数顺序
#[derive(Debug)]
pub(crate) struct SignedQuery<'a> {
    pub q: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub appid: &'a str,
    pub salt: u32,
    pub sign: String,
}

impl SignedQuery<'_> {
    pub(crate) fn pairs(&self) -> [(&'static str, String); 6] {
        [
            ("q", self.q.to_owned()),
            ("from", self.from.to_owned()),
            ("to", self.to.to_owned()),
            ("appid", self.appid.to_owned()),
            ("salt", self.salt.to_string()),
            ("sign", self.sign.clone()),
        ]
    }
}

#[derive(Deserialize, Debug)]
pub struct TranslateResponse {
    /// 实际的源语言，`auto`时为检测出的语言
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub trans_result: Vec<TransResult>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransResult {
    pub src: String,
    pub dst: String,
}

impl TranslateResponse {
    /// 第一段译文
    pub fn first_dst(&self) -> Option<&str> {
        self.trans_result.first().map(|r| r.dst.as_str())
    }
}

/// 接口失败时的响应，`trans_result`不存在
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorResponse {
    #[serde(deserialize_with = "deserialize_code")]
    pub error_code: String,
    pub error_msg: Option<String>,
}

// 文档中error_code是字符串，但部分情况下返回的是数字
fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Str(String),
        Num(i64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Str(s) => s,
        Code::Num(n) => n.to_string(),
    })
}
// endregion --- translate

// region    --- result
/// 一次翻译的最终结果，失败时已经转换成可以直接展示的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    Success {
        translated_text: String,
    },
    Failure {
        kind: ErrorKind,
        message: String,
    },
}

impl TranslationResult {
    pub fn from_result(res: Result<String, Error>, locale: Locale) -> Self {
        match res {
            Ok(translated_text) => TranslationResult::Success { translated_text },
            Err(e) => TranslationResult::Failure {
                kind: e.kind(),
                message: e.message(locale),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }

    pub fn as_str(&self) -> &str {
        match self {
            TranslationResult::Success { translated_text } => translated_text,
            TranslationResult::Failure { message, .. } => message,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            TranslationResult::Success { translated_text } => translated_text,
            TranslationResult::Failure { message, .. } => message,
        }
    }
}

impl std::fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
// endregion --- result
