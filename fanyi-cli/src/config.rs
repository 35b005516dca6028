use anyhow::Context;
use fanyi_sdk::Locale;
use fanyi_sdk::credentials::{APP_ID_ENV, APP_KEY_ENV, Credentials, PLACEHOLDER};
use serde::Deserialize;
use std::num::NonZeroU64;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "fanyi.toml";

/// ```toml
/// app_id = "2015063000000001"
/// app_key = "12345678"
/// # 可选
/// endpoint = "https://fanyi-api.baidu.com/api/trans/vip/translate"
/// timeout_secs = 5 # 必须大于0
/// locale = "zh"
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub app_id: Option<String>,
    pub app_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<NonZeroU64>,
    pub locale: Option<Locale>,
}

impl Config {
    /// 指定了路径时文件必须存在；否则只在当前目录有`fanyi.toml`时读取
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.is_file() {
                    Self::from_file(p)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let conf = toml::from_str(&file_str)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(conf)
    }

    /// 环境变量优先于配置文件
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(APP_ID_ENV) {
            self.app_id = Some(v);
        }
        if let Some(v) = lookup(APP_KEY_ENV) {
            self.app_key = Some(v);
        }
        self
    }

    /// 没有配置的值用占位符代替，由翻译客户端报告配置错误
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.app_id.as_deref().unwrap_or(PLACEHOLDER),
            self.app_key.as_deref().unwrap_or(PLACEHOLDER),
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(|s| Duration::from_secs(s.get()))
    }
}
