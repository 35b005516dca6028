//! 百度翻译的错误码
//!
//! > <a href="https://fanyi-api.baidu.com/doc/21" target="_blank">错误码列表</a>

use crate::Locale;

pub struct ApiErrorCode {
    pub code: &'static str,
    zh: &'static str,
    en: &'static str,
}

impl ApiErrorCode {
    pub fn message(&self, locale: Locale) -> &'static str {
        locale.pick(self.zh, self.en)
    }
}

const fn entry(code: &'static str, zh: &'static str, en: &'static str) -> ApiErrorCode {
    ApiErrorCode { code, zh, en }
}

pub const ERROR_CODES: &[ApiErrorCode] = &[
    entry(
        "52001",
        "翻译失败：请求超时，请检查网络。",
        "Translation failed: request timed out, please check your network.",
    ),
    entry(
        "52002",
        "翻译失败：翻译服务系统错误，请稍后重试。",
        "Translation failed: system error on the translation service, please retry later.",
    ),
    entry(
        "52003",
        "翻译失败：未授权用户（AppID 或 密钥不正确）。",
        "Translation failed: unauthorized client (AppID or secret key is wrong).",
    ),
    entry(
        "54000",
        "翻译失败：签名错误（请检查AppID、密钥或代码中的签名算法）。",
        "Translation failed: signature mismatch (check the AppID, the secret key or the signing algorithm).",
    ),
    entry(
        "54001",
        "翻译失败：请求频率过高，请稍后重试。",
        "Translation failed: too many requests, please retry later.",
    ),
    entry(
        "54003",
        "翻译失败：访问频率受限，请降低调用频率。",
        "Translation failed: access frequency limited, please lower the request rate.",
    ),
    entry(
        "54004",
        "翻译失败：账户余额不足。",
        "Translation failed: insufficient account balance.",
    ),
    entry(
        "54005",
        "翻译失败：长文本请求过于频繁，请稍后重试。",
        "Translation failed: long queries are requested too frequently, please retry later.",
    ),
    entry(
        "58000",
        "翻译失败：客户端IP非法，请检查控制台中填写的IP地址。",
        "Translation failed: client IP is not allowed, check the IP list in the console.",
    ),
    entry(
        "58001",
        "翻译失败：不支持该语种方向。",
        "Translation failed: this translation direction is not supported.",
    ),
    entry(
        "58002",
        "翻译失败：服务当前不可用，请稍后重试。",
        "Translation failed: the service is currently unavailable, please retry later.",
    ),
    entry(
        "58003",
        "翻译失败：客户端IP已被封禁。",
        "Translation failed: client IP has been banned.",
    ),
    entry(
        "90100",
        "翻译失败：API服务未开通或余额不足。",
        "Translation failed: the API service is not enabled or the balance is insufficient.",
    ),
    entry(
        "90107",
        "翻译失败：认证未通过或未生效。",
        "Translation failed: authentication has not passed or is not effective yet.",
    ),
];

pub fn lookup(code: &str) -> Option<&'static ApiErrorCode> {
    ERROR_CODES.iter().find(|e| e.code == code.trim())
}
