use axum::body::Body;
use axum::http::{Request, StatusCode};
use casefile::{HttpServer, RecordStore, ServerConfig};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn server() -> HttpServer {
    HttpServer::new(ServerConfig::default(), Arc::new(RecordStore::sample()))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = server()
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_documents_unfiltered() {
    let (status, json) = get_json("/api/documents").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 12);
    assert_eq!(json["is_empty"], false);
    assert_eq!(json["cards"][0]["person"], "Ghislaine Maxwell");
    assert_eq!(json["cards"][0]["documentType"], "Deposition Transcript");
    assert_eq!(json["cards"][0]["expanded"], false);
}

#[tokio::test]
async fn test_documents_filtered_and_expanded() {
    let (status, json) = get_json("/api/documents?classification=UNSEALED&expanded=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    let cards = json["cards"].as_array().unwrap();
    let expanded: Vec<_> = cards.iter().filter(|c| c["expanded"] == true).collect();
    assert_eq!(expanded.len(), 1);
    assert_eq!(expanded[0]["person"], "Alan Dershowitz");
    assert_eq!(json["expanded"], 4);
}

#[tokio::test]
async fn test_documents_search_and_unknown_classification() {
    let (_, json) = get_json("/api/documents?q=FLIGHT").await;
    assert_eq!(json["count"], 3);

    let (status, json) = get_json("/api/documents?classification=TOP%20SECRET").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert_eq!(json["is_empty"], true);
}

#[tokio::test]
async fn test_empty_params_mean_no_constraint() {
    let (_, json) = get_json("/api/documents?q=&person=&classification=&role=").await;
    assert_eq!(json["count"], 12);
}

#[tokio::test]
async fn test_invalid_expanded_is_rejected() {
    let (status, _) = get("/api/documents?expanded=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_single_document() {
    let (status, json) = get_json("/api/documents/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["person"], "Prince Andrew");
    assert_eq!(json["classification"], "DECLASSIFIED");

    let (status, json) = get_json("/api/documents/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Record 99 not found");
}

#[tokio::test]
async fn test_indexes() {
    let (status, json) = get_json("/api/indexes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["persons"].as_array().unwrap().len(), 12);
    assert_eq!(json["roles"][0], "Associate");
    assert_eq!(
        json["classifications"],
        serde_json::json!(["DECLASSIFIED", "PARTIALLY_REDACTED", "UNSEALED"])
    );
}

#[tokio::test]
async fn test_status() {
    let (status, json) = get_json("/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["storage"]["records"], 12);
}

#[tokio::test]
async fn test_page_renders_empty_state_after_following_connection() {
    let (status, body) = get("/?person=Jeffrey%20Epstein&expanded=1").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("0 DOCUMENTS FOUND"));
    assert!(html.contains("[REDACTED]"));
    // clearing keeps the expansion
    assert!(html.contains(r#"<a href="/?expanded=1" class="clear-btn">"#));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let response = server()
        .router()
        .oneshot(
            Request::builder()
                .uri("/assets/styles.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/css; charset=utf-8"
    );
}
