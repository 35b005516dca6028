use super::Client;
use super::Error;
use super::sign::generate_sign;
use super::types_rs::*;
use super::utils::parse_translate_response;
use crate::credentials::Credentials;
use fanyi_sdk_common::helper::generate_salt;
use tracing::{debug, warn};
use url::Url;

impl Client {
    /// 通用文本翻译
    ///
    /// > <a href="https://fanyi-api.baidu.com/doc/21" target="_blank">api文档地址</a>
    ///
    /// 注意事项:
    /// 1. 标准版QPS为1，超出后返回`54003`
    /// 2. 多段文本用`\n`分隔，返回的`trans_result`每段一条
    pub fn translate_builder(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// 只取第一段译文
    pub async fn translate_text(&self, text: &str, from: &str, to: &str) -> Result<String, Error> {
        let resp = self
            .translate_builder()
            .query(text)
            .from(from)
            .to(to)
            .build()
            .send()
            .await?;

        resp.trans_result
            .into_iter()
            .next()
            .map(|r| r.dst)
            .ok_or_else(|| Error::UnexpectedResponse("empty trans_result".to_owned()))
    }

    pub async fn translate_outcome(&self, text: &str, from: &str, to: &str) -> TranslationResult {
        TranslationResult::from_result(self.translate_text(text, from, to).await, self.locale)
    }

    /// 翻译并返回可以直接展示的文本：成功时为译文，失败时为错误提示，不会返回错误
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> String {
        self.translate_outcome(text, from, to).await.into_string()
    }
}

impl Translate<'_> {
    pub(crate) fn signed_query<'b>(&'b self, creds: &'b Credentials, salt: u32) -> SignedQuery<'b> {
        SignedQuery {
            q: self.query,
            from: self.from,
            to: self.to,
            appid: &creds.app_id,
            salt,
            sign: generate_sign(&creds.app_id, self.query, salt, &creds.app_key),
        }
    }

    pub(crate) fn request_url(&self, creds: &Credentials, salt: u32) -> Result<Url, Error> {
        let endpoint = &self.client.endpoint;
        let query = self.signed_query(creds, salt);
        Url::parse_with_params(endpoint, query.pairs())
            .map_err(|e| Error::Common(format!("invalid endpoint `{endpoint}`: {e}")))
    }

    pub async fn send(&self) -> Result<TranslateResponse, Error> {
        let client = self.client;
        let creds = client.credentials_provider.load().await?;
        if !creds.is_configured() {
            warn!("app id or app key is not configured, request skipped");
            return Err(Error::MissingCredentials);
        }

        let salt = generate_salt();
        let url_ = self.request_url(&creds, salt)?;
        debug!(
            from = self.from,
            to = self.to,
            salt,
            endpoint = %client.endpoint,
            "sending translate request"
        );

        let resp = client
            .http_client
            .get(url_)
            .timeout(client.timeout)
            .send()
            .await
            .map_err(Error::from)
            .inspect_err(|e| warn!(error = %e, "translate request failed"))?;

        let res = parse_translate_response(resp).await;
        match &res {
            Ok(r) => debug!(
                detected = r.from.as_deref().unwrap_or_default(),
                paragraphs = r.trans_result.len(),
                "translate succeeded"
            ),
            Err(e) => warn!(error = %e, "translate failed"),
        }
        res
    }
}
