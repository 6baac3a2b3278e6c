//! Static serving, SPA fallback and rejection over a real socket.

mod common;

use common::{client, refused_addr, start_edge, StaticFixture};
use reqwest::{Method, StatusCode};

async fn edge() -> (StaticFixture, common::EdgeHandle) {
    let fixture = StaticFixture::new();
    let origin = format!("http://{}", refused_addr().await);
    let handle = start_edge(&origin, fixture.path()).await;
    (fixture, handle)
}

#[tokio::test]
async fn client_side_route_serves_shell() {
    let (_fixture, edge) = edge().await;

    let response = client().get(edge.url("/dashboard")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-cache, must-revalidate");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(
        response.text().await.unwrap(),
        "<!doctype html><div id=\"root\"></div>"
    );
}

#[tokio::test]
async fn root_path_serves_shell() {
    let (_fixture, edge) = edge().await;

    let response = client().get(edge.url("/?utm=1")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-cache, must-revalidate");
}

#[tokio::test]
async fn hashed_asset_is_cached_for_a_year() {
    let (_fixture, edge) = edge().await;

    let response = client()
        .get(edge.url("/assets/app.a1b2.js"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["cache-control"],
        "public, max-age=31536000, immutable"
    );
    assert_eq!(response.text().await.unwrap(), "console.log('app')");
}

#[tokio::test]
async fn other_static_files_are_cached_for_a_day() {
    let (_fixture, edge) = edge().await;

    let response = client().get(edge.url("/robots.css")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "public, max-age=86400");
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

#[tokio::test]
async fn html_under_assets_is_revalidated_not_immutable() {
    let (_fixture, edge) = edge().await;

    let response = client()
        .get(edge.url("/assets/page.html"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-cache, must-revalidate");
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(response.text().await.unwrap(), "<p>embedded</p>");
}

#[tokio::test]
async fn missing_asset_is_not_found_not_shell() {
    let (_fixture, edge) = edge().await;

    let response = client()
        .get(edge.url("/assets/app.deadbeef.js"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert!(response.text().await.unwrap().contains("File not found"));
}

#[tokio::test]
async fn traversal_is_not_found() {
    let (fixture, edge) = edge().await;
    fixture.outside_root("leak.css", "secret");

    let response = client()
        .get(edge.url("/assets/..%2f..%2fleak.css"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!response.text().await.unwrap().contains("secret"));
}

#[tokio::test]
async fn non_get_outside_api_is_rejected() {
    let (_fixture, edge) = edge().await;

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = client()
            .request(method.clone(), edge.url("/dashboard"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(response.headers().get("cache-control").is_none());
    }
}

#[tokio::test]
async fn options_anywhere_is_a_preflight() {
    let (_fixture, edge) = edge().await;

    let response = client()
        .request(Method::OPTIONS, edge.url("/dashboard"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
    assert!(response.text().await.unwrap().is_empty());
}
