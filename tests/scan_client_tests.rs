use std::collections::HashMap;

use axum::{
    Router,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use domscan::{ScanClient, ScanError, ScanType};
use url::Url;

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_mock(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    Url::parse(&format!("http://{addr}")).expect("base url")
}

fn client(base: Url) -> ScanClient {
    let http = reqwest::Client::builder().no_proxy().build().expect("http client");
    ScanClient::with_http_client(base, http)
}

fn json(status: StatusCode, body: &'static str) -> impl IntoResponse {
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

#[tokio::test]
async fn single_object_response_becomes_one_result() {
    let router = Router::new().route(
        "/scan/dns",
        get(|| async { json(StatusCode::OK, r#"{"scanner":"dns","domain":"daviani.dev","result":"OK"}"#) }),
    );
    let base = spawn_mock(router).await;

    domscan::validate_domain("daviani.dev").expect("domain accepted");
    let results = client(base).scan("daviani.dev", ScanType::Dns).await.expect("scan ok");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].scanner(), "dns");
    assert_eq!(results[0].domain(), "daviani.dev");
    assert_eq!(results[0].result(), "OK");
}

#[tokio::test]
async fn array_response_is_returned_in_order() {
    let router = Router::new().route(
        "/scan/all",
        get(|| async {
            json(
                StatusCode::OK,
                r#"[{"scanner":"dns","domain":"a.io","result":"A 1.2.3.4"},
                    {"scanner":"ssl","domain":"a.io","result":"valid until 2027"},
                    {"scanner":"header","domain":"a.io","result":"HSTS missing"},
                    {"scanner":"subdomain","domain":"a.io","result":"www.a.io"},
                    {"scanner":"sensitive","domain":"a.io","result":"none"}]"#,
            )
        }),
    );
    let base = spawn_mock(router).await;

    let results = client(base).scan("a.io", ScanType::All).await.expect("scan ok");

    let scanners: Vec<&str> = results.iter().map(|r| r.scanner()).collect();
    assert_eq!(scanners, ["dns", "ssl", "header", "subdomain", "sensitive"]);
}

#[tokio::test]
async fn scan_type_and_domain_reach_the_service_verbatim() {
    // Echoes back what the service received.
    let router = Router::new().route(
        "/scan/{scan_type}",
        get(|Path(scan_type): Path<String>, Query(params): Query<HashMap<String, String>>| async move {
            let mut keys: Vec<&String> = params.keys().collect();
            keys.sort();
            let body = serde_json::json!({
                "scanner": scan_type,
                "domain": params.get("domain").cloned().unwrap_or_default(),
                "result": format!("{keys:?}"),
            });
            (StatusCode::OK, body.to_string())
        }),
    );
    let base = spawn_mock(router).await;
    let client = client(base);

    let results = client.scan("evil.com&scan=all", ScanType::Sensitive).await.expect("scan ok");

    assert_eq!(results[0].scanner(), "sensitive");
    assert_eq!(results[0].domain(), "evil.com&scan=all");
    assert_eq!(results[0].result(), r#"["domain"]"#);
}

#[tokio::test]
async fn error_status_fails_without_partial_results() {
    let router = Router::new().route(
        "/scan/ssl",
        get(|| async {
            json(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"scanner":"ssl","domain":"daviani.dev","result":"partial"}"#,
            )
        }),
    );
    let base = spawn_mock(router).await;

    let outcome = client(base).scan("daviani.dev", ScanType::Ssl).await;

    assert!(matches!(outcome, Err(ScanError::Server(_))));
}

#[tokio::test]
async fn unknown_route_is_a_server_error() {
    let base = spawn_mock(Router::new()).await;

    let outcome = client(base).scan("daviani.dev", ScanType::Header).await;

    assert!(matches!(outcome, Err(ScanError::Server(_))));
}

#[tokio::test]
async fn malformed_payloads_are_server_errors() {
    let router = Router::new()
        .route("/scan/dns", get(|| async { json(StatusCode::OK, "not json") }))
        .route(
            "/scan/subdomain",
            get(|| async { json(StatusCode::OK, r#"{"scanner":"subdomain","domain":"a.io"}"#) }),
        )
        .route(
            "/scan/all",
            get(|| async {
                json(
                    StatusCode::OK,
                    r#"[{"scanner":"dns","domain":"a.io","result":"ok"},{"unexpected":true}]"#,
                )
            }),
        );
    let base = spawn_mock(router).await;
    let client = client(base);

    for scan_type in [ScanType::Dns, ScanType::Subdomain, ScanType::All] {
        let outcome = client.scan("a.io", scan_type).await;
        assert!(matches!(outcome, Err(ScanError::Server(_))), "{scan_type} should fail");
    }
}

#[tokio::test]
async fn unreachable_service_is_a_server_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let base = Url::parse(&format!("http://{addr}")).expect("base url");

    let outcome = client(base).scan("daviani.dev", ScanType::Dns).await;

    assert!(matches!(outcome, Err(ScanError::Server(_))));
}

#[tokio::test]
async fn health_probe_reads_status() {
    let router = Router::new().route("/health", get(|| async { json(StatusCode::OK, r#"{"status":"ok"}"#) }));
    let base = spawn_mock(router).await;

    let health = client(base).health().await.expect("health ok");

    assert!(health.is_ok());
}
