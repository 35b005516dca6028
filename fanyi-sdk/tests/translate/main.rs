use fanyi_sdk::Locale;
use fanyi_sdk::credentials::{EnvCredentialsProvider, PLACEHOLDER, StaticCredentialsProvider};
use fanyi_sdk::translate::sign::generate_sign;
use fanyi_sdk::translate::*;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const APP_ID: &str = "2015063000000001";
const APP_KEY: &str = "12345678";
const PATH: &str = "/api/trans/vip/translate";

// region    --- local endpoint
struct MockServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// 对每个请求都返回同样的响应；`body`为None时不响应，只保持连接
    async fn start(status: &'static str, body: Option<&'static str>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let request_lines = Arc::new(Mutex::new(Vec::new()));

        let (hits_, lines_) = (hits.clone(), request_lines.clone());
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                hits_.fetch_add(1, Ordering::SeqCst);
                let lines = lines_.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf);
                    let first_line = head.lines().next().unwrap_or_default().to_owned();
                    lines.lock().unwrap().push(first_line);

                    let Some(body) = body else {
                        tokio::time::sleep(Duration::from_secs(10)).await;
                        return;
                    };
                    let resp = format!(
                        "HTTP/1.1 {status}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(resp.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            addr,
            hits,
            request_lines,
        }
    }

    fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, PATH)
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn client_for(endpoint: String, app_id: &str, app_key: &str) -> Client {
    Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(app_id, app_key)))
        .endpoint(endpoint)
        .timeout(Duration::from_millis(500))
        .http_client(http_client())
        .build()
}
// endregion --- local endpoint

#[tokio::test]
async fn translate_success_sends_signed_query() {
    let server = MockServer::start(
        "200 OK",
        Some(r#"{"from":"en","to":"zh","trans_result":[{"src":"hi","dst":"你好"}]}"#),
    )
    .await;
    let client = client_for(server.endpoint(), APP_ID, APP_KEY);

    let s = client.translate("hi", "en", "zh").await;
    assert_eq!(s, "你好");
    assert_eq!(server.hits(), 1);

    let line = server.request_lines.lock().unwrap()[0].clone();
    let target = line.split_whitespace().nth(1).unwrap();
    assert!(line.starts_with("GET "), "{line}");
    let url_ = url::Url::parse(&format!("http://{}{}", server.addr, target)).unwrap();
    assert_eq!(url_.path(), PATH);

    let pairs = url_.query_pairs().into_owned().collect::<Vec<_>>();
    let keys = pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, ["q", "from", "to", "appid", "salt", "sign"]);
    let get = |name: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(get("q"), "hi");
    assert_eq!(get("from"), "en");
    assert_eq!(get("to"), "zh");
    assert_eq!(get("appid"), APP_ID);
    let salt = get("salt").parse::<u32>().unwrap();
    assert!((32768..65536).contains(&salt));
    assert_eq!(get("sign"), generate_sign(APP_ID, "hi", salt, APP_KEY));
}

#[tokio::test]
async fn send_returns_all_paragraphs() {
    let server = MockServer::start(
        "200 OK",
        Some(r#"{"from":"en","to":"zh","trans_result":[{"src":"one","dst":"一"},{"src":"two","dst":"二"}]}"#),
    )
    .await;
    let client = client_for(server.endpoint(), APP_ID, APP_KEY);

    let resp = client
        .translate_builder()
        .query("one\ntwo")
        .to("zh")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.from.as_deref(), Some("en"));
    assert_eq!(
        resp.trans_result
            .iter()
            .map(|r| r.dst.as_str())
            .collect::<Vec<_>>(),
        ["一", "二"]
    );
}

#[tokio::test]
async fn translate_rate_limited() {
    let server = MockServer::start(
        "200 OK",
        Some(r#"{"error_code":"54001","error_msg":"Invalid Sign"}"#),
    )
    .await;
    let client = client_for(server.endpoint(), APP_ID, APP_KEY);

    let s = client.translate("hi", "auto", "zh").await;
    assert_eq!(s, "翻译失败：请求频率过高，请稍后重试。");
}

#[tokio::test]
async fn translate_unknown_error_code() {
    let server = MockServer::start(
        "200 OK",
        Some(r#"{"error_code":"99999","error_msg":"foo"}"#),
    )
    .await;
    let client = client_for(server.endpoint(), APP_ID, APP_KEY);

    let res = client.translate_outcome("hi", "auto", "zh").await;
    assert!(!res.is_success());
    assert!(matches!(
        res,
        TranslationResult::Failure {
            kind: ErrorKind::ApiUnknown,
            ..
        }
    ));
    assert!(res.as_str().contains("99999"));
    assert!(res.as_str().contains("foo"));
}

#[tokio::test]
async fn translate_non_json_body() {
    let server = MockServer::start("200 OK", Some("<html>upstream error</html>")).await;
    let client = client_for(server.endpoint(), APP_ID, APP_KEY);

    let s = client.translate("hi", "auto", "zh").await;
    assert_eq!(s, "API 返回的数据不是有效的 JSON 格式。");
}

#[tokio::test]
async fn translate_http_error_status() {
    let server = MockServer::start("502 Bad Gateway", Some("bad gateway")).await;
    let client = client_for(server.endpoint(), APP_ID, APP_KEY);

    let err = client.translate_text("hi", "auto", "zh").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OtherTransport);
    assert!(err.message(Locale::En).contains("502"));
}

#[tokio::test]
async fn translate_without_credentials_sends_nothing() {
    let server = MockServer::start(
        "200 OK",
        Some(r#"{"trans_result":[{"src":"hi","dst":"你好"}]}"#),
    )
    .await;

    let client = client_for(server.endpoint(), PLACEHOLDER, PLACEHOLDER);
    let s = client.translate("hi", "auto", "zh").await;
    assert_eq!(s, "错误：请配置您的真实 AppID 和 密钥！");

    let client = client_for(server.endpoint(), APP_ID, "");
    let err = client.translate_text("hi", "auto", "zh").await.unwrap_err();
    assert!(matches!(err, Error::MissingCredentials));

    let client = Client::builder()
        .credentials_provider(Arc::new(EnvCredentialsProvider::new(
            "FANYI_TEST_SURELY_UNSET_ID",
            "FANYI_TEST_SURELY_UNSET_KEY",
        )))
        .endpoint(server.endpoint())
        .locale(Locale::En)
        .http_client(http_client())
        .build();
    let res = client.translate_outcome("hi", "auto", "zh").await;
    assert!(matches!(
        res,
        TranslationResult::Failure {
            kind: ErrorKind::Configuration,
            ..
        }
    ));
    assert!(res.as_str().contains("FANYI_TEST_SURELY_UNSET_ID"));

    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn translate_timeout() {
    let server = MockServer::start("200 OK", None).await;
    let client = Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(APP_ID, APP_KEY)))
        .endpoint(server.endpoint())
        .timeout(Duration::from_millis(300))
        .http_client(http_client())
        .build();

    let err = client.translate_text("hi", "auto", "zh").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(
        err.message(Locale::Zh),
        "请求超时，API 服务器响应缓慢或网络不稳定。"
    );
}

#[tokio::test]
async fn translate_connection_refused() {
    // 拿到一个空闲端口后立即关闭
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(format!("http://{addr}{PATH}"), APP_ID, APP_KEY);

    let res = client.translate_outcome("hi", "auto", "zh").await;
    assert!(matches!(
        res,
        TranslationResult::Failure {
            kind: ErrorKind::ConnectionFailure,
            ..
        }
    ));
    assert_eq!(res.to_string(), "网络连接错误，请检查您的网络连接。");
}

#[tokio::test]
async fn transport_errors_hide_signed_url() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(format!("http://{addr}{PATH}"), APP_ID, APP_KEY);

    let err = client
        .translate_text("secret text", "auto", "zh")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    let shown = [
        err.to_string(),
        format!("{err:?}"),
        err.message(Locale::Zh),
        err.message(Locale::En),
    ];
    for s in shown {
        assert!(!s.contains("sign="), "{s}");
        assert!(!s.contains("appid="), "{s}");
        assert!(!s.contains(APP_ID), "{s}");
        assert!(!s.contains("secret"), "{s}");
    }

    let server = MockServer::start("200 OK", None).await;
    let client = Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(APP_ID, APP_KEY)))
        .endpoint(server.endpoint())
        .timeout(Duration::from_millis(300))
        .http_client(http_client())
        .build();
    let err = client
        .translate_text("secret text", "auto", "zh")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(!err.to_string().contains("sign="), "{err}");
    assert!(!format!("{err:?}").contains("sign="), "{err:?}");
}

// region    --- live api
#[derive(Deserialize, Debug)]
pub struct FanyiConfig {
    pub app_id: String,
    pub app_key: String,
}

impl FanyiConfig {
    pub fn get_conf() -> Self {
        let file_str = std::fs::read_to_string("tests/translate/config.toml").unwrap();
        toml::from_str(&file_str).unwrap()
    }
}

fn get_trans_client() -> Client {
    let conf = FanyiConfig::get_conf();
    Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(
            conf.app_id,
            conf.app_key,
        )))
        .build()
}

#[tokio::test]
#[ignore]
async fn translate_test() {
    let client = get_trans_client();
    let res = client
        .translate_builder()
        .query("test first line.\ntest second line.")
        .from("en")
        .to("zh")
        .build()
        .send()
        .await;

    match res {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}
// endregion --- live api
