use super::types_rs::{ErrorResponse, TranslateResponse};
use crate::translate::Error;
use fanyi_sdk_common::helper::{parse_json_str, read_success_text};
use serde::Deserialize;
use serde_json::Value;

pub(crate) async fn parse_translate_response(
    resp: reqwest::Response,
) -> Result<TranslateResponse, Error> {
    let text = read_success_text(resp).await?;
    parse_translate_body(&text)
}

/// 返回的`TranslateResponse`中`trans_result`一定非空
pub(crate) fn parse_translate_body(text: &str) -> Result<TranslateResponse, Error> {
    let value: Value = parse_json_str(text)?;

    let has_result = value
        .get("trans_result")
        .and_then(Value::as_array)
        .is_some_and(|list| !list.is_empty());
    if has_result {
        return TranslateResponse::deserialize(&value).map_err(|_| unexpected_structure(&value));
    }

    if value.get("error_code").is_some() {
        let ErrorResponse {
            error_code,
            error_msg,
        } = ErrorResponse::deserialize(&value).map_err(|_| unexpected_structure(&value))?;
        return Err(Error::Api {
            code: error_code,
            message: error_msg,
        });
    }

    Err(unexpected_structure(&value))
}

fn unexpected_structure(value: &Value) -> Error {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    Error::UnexpectedResponse(pretty)
}
