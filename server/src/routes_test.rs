use super::*;

use reqwest::redirect::Policy;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("rks-site").site_root("target/site").build()
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(test_options())).await.unwrap();
    });
    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().redirect(Policy::none()).build().unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_app().await;
    let res = client().get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn root_renders_site_shell() {
    let base = spawn_app().await;
    let res = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("scaler-frame"));
    assert!(body.contains("RKS Creations"));
}

#[tokio::test]
async fn unknown_path_redirects_home() {
    let base = spawn_app().await;
    let res = client().get(format!("{base}/products/hangtags")).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/");
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let base = spawn_app().await;
    let res = client().get(format!("{base}/pkg/missing.wasm")).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[test]
fn bind_error_names_address() {
    let err = ServeError::Bind {
        addr: "127.0.0.1:80".parse().unwrap(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "bind 127.0.0.1:80 failed: denied");
}
