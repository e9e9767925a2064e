use super::*;

fn test_client(base_url: &str) -> StoreClient {
    StoreClient::with_base_url(base_url, 30, "hvstore-test", None)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = test_client("http://localhost:5000/api");
    let url = client.endpoint(&["Order", "all"]);
    assert_eq!(url.as_str(), "http://localhost:5000/api/Order/all");
}

#[test]
fn endpoint_ignores_trailing_slashes_on_base() {
    let client = test_client("http://localhost:5000/api//");
    let url = client.endpoint(&["DashBoard", "stats"]);
    assert_eq!(url.as_str(), "http://localhost:5000/api/DashBoard/stats");
}

#[test]
fn endpoint_percent_encodes_order_ids() {
    let client = test_client("https://shop.example.vn");
    let url = client.endpoint(&["Order", "a/b c"]);
    assert_eq!(url.as_str(), "https://shop.example.vn/Order/a%2Fb%20c");
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = StoreClient::with_base_url("not a url", 30, "ua", None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "{err:?}");
}

#[test]
fn empty_token_counts_as_none() {
    let client =
        StoreClient::with_base_url("http://localhost", 30, "ua", Some(String::new())).unwrap();
    assert!(!client.has_token());
}

#[test]
fn debug_redacts_token() {
    let client = StoreClient::with_base_url("http://localhost", 30, "ua", Some("s3cret".into()))
        .unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("s3cret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn backend_message_ignores_blank_messages() {
    let err = ApiError::Status {
        status: 500,
        url: "http://x".into(),
        message: Some("  ".into()),
    };
    assert!(err.backend_message().is_none());
    assert_eq!(err.status(), Some(500));
}
