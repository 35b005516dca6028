//! 通用文本翻译
//!
//! 每次调用只发送一次签名后的GET请求，不缓存、不重试。

use crate::Locale;
use crate::credentials::CredentialsProvider;
use bon::bon;
use std::sync::Arc;
use std::time::Duration;

mod error;
pub use error::{Error, ErrorKind};

pub mod error_code;
pub mod sign;

mod trans;
mod types_rs;
pub use types_rs::*;
mod utils;

/// 通用文本翻译接口地址
pub const API_URL: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Client {
    credentials_provider: Arc<dyn CredentialsProvider>,
    http_client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    locale: Locale,
}

#[bon]
impl Client {
    /// - `endpoint`: 默认[`API_URL`]
    /// - `timeout`: 单次请求的超时时间，默认5秒
    /// - `locale`: [`Client::translate`]返回的提示信息使用的语言，默认中文
    /// - `http_client`: 需要代理等设置的时候可以传入自己构建的`reqwest::Client`
    #[builder(on(String, into))]
    pub fn new(
        credentials_provider: Arc<dyn CredentialsProvider>,
        #[builder(default = API_URL.to_owned())] endpoint: String,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
        #[builder(default)] locale: Locale,
        http_client: Option<reqwest::Client>,
    ) -> Self {
        Self {
            credentials_provider,
            http_client: http_client.unwrap_or_default(),
            endpoint,
            timeout,
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
