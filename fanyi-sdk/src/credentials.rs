//! Credentials and CredentialsProvider definitions.
//!
//! 构建[`Client`](crate::translate::Client)的时候需要传入实现了`CredentialsProvider` trait的类型，
//! 每次发送翻译请求前都会调用一次`load`，所以可以在provider中实现从环境变量、配置文件或者远端读取AppID和密钥。
//!
//! # Example
//! ```no_run
//! use fanyi_sdk::credentials::{Credentials, CredentialsError, CredentialsProvider};
//! use fanyi_sdk::translate;
//! use serde::Deserialize;
//! use std::sync::Arc;
//!
//! #[derive(Deserialize, Debug)]
//! pub struct FanyiConfig {
//!     pub app_id: String,
//!     pub app_key: String,
//! }
//!
//! pub struct FileCredsProvider {
//!     path: String,
//! }
//!
//! #[async_trait::async_trait]
//! impl CredentialsProvider for FileCredsProvider {
//!     async fn load(&self) -> Result<Credentials, CredentialsError> {
//!         let file_str = std::fs::read_to_string(&self.path)
//!             .map_err(|e| CredentialsError::Provider(e.to_string()))?;
//!         let conf = toml::from_str::<FanyiConfig>(&file_str)
//!             .map_err(|e| CredentialsError::Provider(e.to_string()))?;
//!         Ok(Credentials::new(conf.app_id, conf.app_key))
//!     }
//! }
//!
//! fn get_trans_client() -> translate::Client {
//!     let provider = Arc::new(FileCredsProvider {
//!         path: "tests/translate/config.toml".to_owned(),
//!     });
//!     translate::Client::builder()
//!         .credentials_provider(provider)
//!         .build()
//! }
//! ```

/// 未配置时使用的占位值，带着它发出的请求一定会被拒绝
pub const PLACEHOLDER: &str = "%%%";

pub const APP_ID_ENV: &str = "FANYI_APP_ID";
pub const APP_KEY_ENV: &str = "FANYI_APP_KEY";

#[derive(Clone)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// AppID和密钥都已经替换成真实的值
    pub fn is_configured(&self) -> bool {
        fn is_set(s: &str) -> bool {
            let s = s.trim();
            !s.is_empty() && s != PLACEHOLDER
        }
        is_set(&self.app_id) && is_set(&self.app_key)
    }
}

// 不打印密钥
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"***")
            .finish()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("failed to load credentials: {0}")]
    Provider(String),
    #[error("environment variable `{0}` is not set")]
    MissingEnv(String),
}

#[async_trait::async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn load(&self) -> Result<Credentials, CredentialsError>;
}

/// 固定的AppID和密钥
pub struct StaticCredentialsProvider {
    creds: Credentials,
}

impl StaticCredentialsProvider {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            creds: Credentials::new(app_id, app_key),
        }
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for StaticCredentialsProvider {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.creds.clone())
    }
}

/// 每次`load`的时候从环境变量读取，默认读取`FANYI_APP_ID`和`FANYI_APP_KEY`
pub struct EnvCredentialsProvider {
    app_id_var: String,
    app_key_var: String,
}

impl EnvCredentialsProvider {
    pub fn new(app_id_var: impl Into<String>, app_key_var: impl Into<String>) -> Self {
        Self {
            app_id_var: app_id_var.into(),
            app_key_var: app_key_var.into(),
        }
    }
}

impl Default for EnvCredentialsProvider {
    fn default() -> Self {
        Self::new(APP_ID_ENV, APP_KEY_ENV)
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for EnvCredentialsProvider {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        let read = |name: &str| {
            std::env::var(name).map_err(|_| CredentialsError::MissingEnv(name.to_owned()))
        };
        Ok(Credentials::new(
            read(&self.app_id_var)?,
            read(&self.app_key_var)?,
        ))
    }
}
