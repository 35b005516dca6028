use fanyi_sdk_common::helper::hash_md5_hex;

/// sign = MD5(appid + q + salt + 密钥)，32位小写
///
/// 拼接顺序和哈希算法由接口规定，`q`使用原文，不做urlencode
pub fn generate_sign(app_id: &str, query: &str, salt: u32, app_key: &str) -> String {
    let sign_str = format!("{app_id}{query}{salt}{app_key}");
    hash_md5_hex(sign_str.as_bytes())
}
