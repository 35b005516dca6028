use crate::Error;
use md5::{Digest, Md5};
use rand::Rng;
use std::ops::Range;

/// 百度翻译签名使用的salt取值范围
pub const SALT_RANGE: Range<u32> = 32768..65536;

/// 计算md5并输出32位小写十六进制字符串
pub fn hash_md5_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// 每次请求生成一个新的salt，范围见[`SALT_RANGE`]
pub fn generate_salt() -> u32 {
    rand::rng().random_range(SALT_RANGE)
}

pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let body = resp.text().await;
    match body {
        Ok(message) => Error::RequestAPIFailed {
            status: status.to_string(),
            message,
        },
        Err(e) => Error::Reqwest(e),
    }
}

/// 状态码非2xx时返回`RequestAPIFailed`，否则读取完整的响应体
pub async fn read_success_text(resp: reqwest::Response) -> Result<String, Error> {
    let status = resp.status();

    if !status.is_success() {
        return Err(into_request_failed_error(resp).await);
    }

    let text = resp.text().await?;
    Ok(text)
}

pub fn parse_json_str<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, Error> {
    let data = serde_json::from_str(text)?;
    Ok(data)
}
