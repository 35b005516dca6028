use super::error_code;
use crate::Locale;
use crate::credentials::CredentialsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("credentials are not configured, set a real app id and app key")]
    MissingCredentials,
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),
    #[error("connect error: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[source] reqwest::Error),
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("unknown response structure: {0}")]
    UnexpectedResponse(String),
    #[error("api error code: {code}, message: {}", .message.as_deref().unwrap_or("unknown error"))]
    Api {
        code: String,
        message: Option<String>,
    },
    #[error("error: {0}")]
    Common(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    ConnectionFailure,
    Timeout,
    OtherTransport,
    Protocol,
    ApiKnown,
    ApiUnknown,
    Unexpected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingCredentials | Error::Credentials(_) => ErrorKind::Configuration,
            Error::Connect(_) => ErrorKind::ConnectionFailure,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::Reqwest(_) | Error::RequestAPIFailed { .. } => ErrorKind::OtherTransport,
            Error::InvalidJson(_) | Error::UnexpectedResponse(_) => ErrorKind::Protocol,
            Error::Api { code, .. } => match error_code::lookup(code) {
                Some(_) => ErrorKind::ApiKnown,
                None => ErrorKind::ApiUnknown,
            },
            Error::Common(_) => ErrorKind::Unexpected,
        }
    }

    /// 给用户看的提示信息
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Error::MissingCredentials => locale
                .pick(
                    "错误：请配置您的真实 AppID 和 密钥！",
                    "Error: please configure your real AppID and secret key!",
                )
                .to_owned(),
            Error::Credentials(e) => match locale {
                Locale::Zh => format!("错误：无法读取 AppID 和 密钥: {e}"),
                Locale::En => format!("Error: unable to load AppID and secret key: {e}"),
            },
            Error::Connect(_) => locale
                .pick(
                    "网络连接错误，请检查您的网络连接。",
                    "Network connection error, please check your network connection.",
                )
                .to_owned(),
            Error::Timeout(_) => locale
                .pick(
                    "请求超时，API 服务器响应缓慢或网络不稳定。",
                    "Request timed out, the API server is slow or the network is unstable.",
                )
                .to_owned(),
            Error::Reqwest(e) => match locale {
                Locale::Zh => format!("请求失败: {e}"),
                Locale::En => format!("Request failed: {e}"),
            },
            Error::RequestAPIFailed { status, message } => match locale {
                Locale::Zh => format!("请求失败: HTTP {status}, {message}"),
                Locale::En => format!("Request failed: HTTP {status}, {message}"),
            },
            Error::InvalidJson(_) => locale
                .pick(
                    "API 返回的数据不是有效的 JSON 格式。",
                    "The API response is not valid JSON.",
                )
                .to_owned(),
            Error::UnexpectedResponse(body) => match locale {
                Locale::Zh => format!("未知 API 响应结构: {body}"),
                Locale::En => format!("Unknown API response structure: {body}"),
            },
            Error::Api { code, message } => {
                if let Some(known) = error_code::lookup(code) {
                    return known.message(locale).to_owned();
                }
                let message = message
                    .as_deref()
                    .unwrap_or_else(|| locale.pick("未知错误", "unknown error"));
                match locale {
                    Locale::Zh => format!("API 错误代码: {code}, 错误信息: {message}"),
                    Locale::En => format!("API error code: {code}, error message: {message}"),
                }
            }
            Error::Common(e) => match locale {
                Locale::Zh => format!("发生未预期错误: {e}"),
                Locale::En => format!("Unexpected error: {e}"),
            },
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        // url中带有appid、sign和原文，不能出现在错误信息和日志里
        let e = e.without_url();
        // 连接超时同时满足is_connect，按超时处理
        if e.is_timeout() {
            Error::Timeout(e)
        } else if e.is_connect() {
            Error::Connect(e)
        } else {
            Error::Reqwest(e)
        }
    }
}

impl From<fanyi_sdk_common::Error> for Error {
    fn from(e: fanyi_sdk_common::Error) -> Self {
        match e {
            fanyi_sdk_common::Error::Common(msg) => Error::Common(msg),
            fanyi_sdk_common::Error::RequestAPIFailed { status, message } => {
                Error::RequestAPIFailed { status, message }
            }
            fanyi_sdk_common::Error::Reqwest(e) => e.into(),
            fanyi_sdk_common::Error::Json(e) => Error::InvalidJson(e),
        }
    }
}
