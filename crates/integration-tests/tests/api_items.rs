//! Integration tests for the catalog endpoints.

use axum::http::{Method, StatusCode};
use serde_json::json;

use emporio_integration_tests::{app, send};

#[tokio::test]
async fn test_list_items_returns_whole_catalog_in_order() {
    let (status, body) = send(app(), Method::GET, "/items/", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("body is an array");
    assert_eq!(items.len(), 3);

    let ids: Vec<&str> = items
        .iter()
        .map(|i| i["id"].as_str().expect("id is a string"))
        .collect();
    assert_eq!(ids, vec!["0", "1", "3"]);
}

#[tokio::test]
async fn test_get_item_returns_exact_record() {
    let (status, body) = send(app(), Method::GET, "/items/0", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "0",
            "name": "QUEIJO PALITO",
            "price": 31.9,
            "details": "450g - artesanal",
            "image": "assets/imagens/foto0.png",
            "category": "Queijos Tradicionais"
        })
    );
}

#[tokio::test]
async fn test_get_unknown_item_is_404_with_localized_detail() {
    let (status, body) = send(app(), Method::GET, "/items/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item não encontrado");
}

#[tokio::test]
async fn test_items_path_without_trailing_slash_also_resolves() {
    let (status, _) = send(app(), Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_catalog_body_is_utf8_json() {
    let (_, body) = send(app(), Method::GET, "/items/1", None).await;
    // Non-ASCII catalog text survives the round trip
    assert_eq!(body["name"], "QUEIJO TRANÇA");
}
