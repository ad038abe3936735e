//! End-to-end refresh: `/update_db` imports the configured catalog.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use specdex_core::AppConfig;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

const CATALOG: &str = r#"{
    "brands": [
        {
            "id": "google",
            "name": "Google",
            "devices": [
                {
                    "id": "google_pixel_8-12546",
                    "name": "Pixel 8",
                    "specifications": [
                        { "category": "Display", "field": "Size", "value": "6.2 inches" },
                        { "category": "Platform", "field": "Chipset", "value": "Google Tensor G3" }
                    ]
                }
            ]
        }
    ]
}"#;

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route request")
}

async fn response_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response json")
}

#[tokio::test]
async fn test_update_db_imports_catalog() {
    let tmp = TempDir::new().expect("create temp dir");
    let catalog_path = tmp.path().join("catalog.json");
    std::fs::write(&catalog_path, CATALOG).expect("write catalog");

    let mut config = AppConfig::default();
    config.database.path = Some(tmp.path().join("specdex.db"));
    config.scraper.catalog_path = Some(catalog_path);

    let state = specdex_server::build_state(&config)
        .await
        .expect("build state");
    let app = specdex_server::build_router(state);

    let response = get(&app, "/devices/google_pixel_8-12546").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/update_db").await;
    assert_eq!(response.status(), StatusCode::OK);

    let detail = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let response = get(&app, "/devices/google_pixel_8-12546").await;
            if response.status() == StatusCode::OK {
                break response_json(response).await;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("refresh did not import the catalog");

    assert_eq!(detail["brand"]["name"], "Google");
    assert_eq!(
        detail["specifications"]["Platform"]["Chipset"],
        "Google Tensor G3"
    );

    let response = get(&app, "/brands").await;
    let json = response_json(response).await;
    assert_eq!(json["totalBrands"], 1);
}
