//! Tests for the Confluence client

use super::*;
use crate::auth::AuthConfig;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::{PageDescriptor, WarningKind};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::ops::Range;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, page_size: u32) -> ConfluenceClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    let http = HttpClient::new(config, AuthConfig::basic("user", "token")).unwrap();
    ConfluenceClient::new(http, "DOCS", page_size)
}

fn window(ids: Range<u32>, has_next: bool) -> Value {
    let results: Vec<Value> = ids
        .map(|id| json!({"id": id.to_string(), "type": "page", "title": format!("Page {id}")}))
        .collect();
    let size = results.len();
    let mut links = json!({"base": "https://wiki.example.com", "context": ""});
    if has_next {
        links["next"] = json!("/rest/api/content?next=true");
    }
    json!({"results": results, "size": size, "_links": links})
}

async fn mount_window(server: &MockServer, start: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .and(query_param("spaceKey", "DOCS"))
        .and(query_param("type", "page"))
        .and(query_param("start", start.to_string().as_str()))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn ids(listing: &PageListing) -> Vec<String> {
    listing.pages.iter().map(|p| p.id.clone()).collect()
}

// ============================================================================
// Page Lister Tests
// ============================================================================

#[tokio::test]
async fn test_list_single_window() {
    let server = MockServer::start().await;
    mount_window(&server, 0, window(1..4, false)).await;

    let listing = client(&server, 25).list_pages().await;

    assert_eq!(ids(&listing), vec!["1", "2", "3"]);
    assert_eq!(listing.requests, 1);
    assert!(listing.is_complete());
    assert!(listing.warnings.is_empty());
    assert_eq!(
        listing.pages[0],
        PageDescriptor::new("1").with_title("Page 1")
    );
}

#[tokio::test]
async fn test_list_issues_ceil_n_over_p_requests() {
    // 60 pages at 25 per window: 25 + 25 + 10.
    let server = MockServer::start().await;
    mount_window(&server, 0, window(0..25, true)).await;
    mount_window(&server, 25, window(25..50, true)).await;
    mount_window(&server, 50, window(50..60, false)).await;

    let listing = client(&server, 25).list_pages().await;

    let expected: Vec<String> = (0..60).map(|i| i.to_string()).collect();
    assert_eq!(ids(&listing), expected);
    assert_eq!(listing.requests, 3);
    assert_eq!(listing.len(), 60);
    assert!(!listing.truncated);
}

#[tokio::test]
async fn test_list_empty_space() {
    let server = MockServer::start().await;
    mount_window(&server, 0, window(0..0, false)).await;

    let listing = client(&server, 25).list_pages().await;

    assert!(listing.is_empty());
    assert_eq!(listing.requests, 1);
    assert!(listing.is_complete());
}

#[tokio::test]
async fn test_list_failure_keeps_partial_results() {
    // The second request fails: exactly the first window survives and no
    // third request is made.
    let server = MockServer::start().await;
    mount_window(&server, 0, window(0..25, true)).await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .and(query_param("start", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(window(50..60, false)))
        .expect(0)
        .mount(&server)
        .await;

    let listing = client(&server, 25).list_pages().await;

    assert_eq!(listing.len(), 25);
    assert_eq!(listing.requests, 2);
    assert!(listing.truncated);
    assert!(!listing.is_complete());
    assert_eq!(listing.warnings.len(), 1);

    let warning = &listing.warnings[0];
    assert_eq!(warning.kind, WarningKind::ListingFailed);
    assert_eq!(warning.status, Some(500));
    assert!(warning.page_id.is_none());
    assert_eq!(
        warning.message,
        "Listing stopped after 25 pages at offset 25: HTTP 500"
    );
}

#[tokio::test]
async fn test_list_first_request_failure_returns_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client(&server, 25).list_pages().await;

    assert!(listing.is_empty());
    assert!(listing.truncated);
    assert_eq!(listing.warnings[0].status, Some(401));
}

#[tokio::test]
async fn test_list_failure_after_short_window_keeps_partial() {
    // The short second window still carried a next link, so a third
    // request went out and failed.
    let server = MockServer::start().await;
    mount_window(&server, 0, window(0..25, true)).await;
    mount_window(&server, 25, window(25..30, true)).await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .and(query_param("start", "50"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client(&server, 25).list_pages().await;

    assert_eq!(listing.len(), 30);
    assert_eq!(listing.requests, 3);
    assert!(listing.truncated);
}

#[tokio::test]
async fn test_list_offset_grows_past_u32_with_largest_window() {
    let server = MockServer::start().await;
    let size = u32::MAX;
    let windows = [
        (0_u64, json!({"results": [{"id": "1"}], "_links": {"next": "/n"}})),
        (u64::from(size), json!({"results": [{"id": "2"}], "_links": {"next": "/n"}})),
        (2 * u64::from(size), json!({"results": [{"id": "3"}], "_links": {}})),
    ];
    for (start, body) in windows {
        Mock::given(method("GET"))
            .and(path("/rest/api/content"))
            .and(query_param("start", start.to_string().as_str()))
            .and(query_param("limit", size.to_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let listing = client(&server, size).list_pages().await;

    assert_eq!(ids(&listing), vec!["1", "2", "3"]);
    assert_eq!(listing.requests, 3);
    assert!(listing.is_complete());
}

#[tokio::test]
async fn test_list_malformed_body_truncates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client(&server, 25).list_pages().await;

    assert!(listing.truncated);
    assert_eq!(listing.warnings[0].kind, WarningKind::ListingFailed);
    assert_eq!(listing.warnings[0].status, None);
}

#[tokio::test]
async fn test_list_connection_failure_truncates() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = HttpClientConfig::builder().base_url(uri).build();
    let http = HttpClient::new(config, AuthConfig::basic("user", "token")).unwrap();
    let listing = ConfluenceClient::new(http, "DOCS", 25).list_pages().await;

    assert!(listing.is_empty());
    assert!(listing.truncated);
    assert_eq!(listing.requests, 1);
    assert_eq!(listing.warnings[0].status, None);
}

#[tokio::test]
async fn test_list_with_custom_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .and(query_param("start", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(window(0..2, true)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content"))
        .and(query_param("start", "2"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(window(2..3, false)))
        .expect(1)
        .mount(&server)
        .await;

    let c = client(&server, 2);
    let listing = c.list_pages().await;

    assert_eq!(ids(&listing), vec!["0", "1", "2"]);
    assert_eq!(c.space_key(), "DOCS");
}

// ============================================================================
// Title Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_page_title_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/98305"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "98305", "title": "Q&A: Setup!!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lookup = client(&server, 25).page_title("98305").await;

    assert_eq!(lookup, TitleLookup::Found("Q&A: Setup!!".to_string()));
    assert_eq!(lookup.title(), "Q&A: Setup!!");
    assert!(lookup.warning().is_none());
}

#[tokio::test]
async fn test_page_title_missing_field_uses_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7"})))
        .mount(&server)
        .await;

    let lookup = client(&server, 25).page_title("7").await;

    assert_eq!(lookup, TitleLookup::Missing("Confluence_Page_7".to_string()));
    assert!(lookup.warning().is_none());
}

#[tokio::test]
async fn test_page_title_failure_uses_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/404404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No content found"))
        .mount(&server)
        .await;

    let lookup = client(&server, 25).page_title("404404").await;

    assert_eq!(lookup.title(), "Confluence_Page_404404");
    let (title, warning) = lookup.into_parts();
    let warning = warning.unwrap();
    assert_eq!(title, "Confluence_Page_404404");
    assert_eq!(warning.kind, WarningKind::TitleFallback);
    assert_eq!(warning.page_id.as_deref(), Some("404404"));
    assert_eq!(warning.status, Some(404));
    assert_eq!(warning.message, "Title lookup failed: HTTP 404");
}

// ============================================================================
// PDF Export Tests
// ============================================================================

#[tokio::test]
async fn test_export_pdf_returns_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/flyingpdf/pdfpageexport.action"))
        .and(query_param("pageid", "42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-1.7 page 42".to_vec())
                .insert_header("Content-Type", "application/pdf"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client(&server, 25).export_pdf("42").await.unwrap();
    assert_eq!(bytes.as_ref(), b"%PDF-1.7 page 42");
}

#[tokio::test]
async fn test_export_pdf_failure_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/flyingpdf/pdfpageexport.action"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let err = client(&server, 25).export_pdf("42").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.body(), Some("Forbidden"));
}

#[test]
fn test_failure_reason() {
    assert_eq!(
        failure_reason(&crate::Error::http_status(500, "<html>huge</html>")),
        "HTTP 500"
    );
    assert_eq!(
        failure_reason(&crate::Error::decode("bad body")),
        "Failed to decode response: bad body"
    );
}
