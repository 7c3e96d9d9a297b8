use krd_core::error::FetchError;
use krd_core::record::Record;
use krd_core::source::StaticSource;
use krd_web::{Site, router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;

struct Reply {
    status: u16,
    content_type: String,
    body: String,
}

async fn serve(source: StaticSource) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(Site::new(Arc::new(source))));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn get(url: String) -> Reply {
    tokio::task::spawn_blocking(move || {
        let response = match ureq::get(&url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(err) => panic!("request to {url} failed: {err}"),
        };
        Reply {
            status: response.status(),
            content_type: response.content_type().to_string(),
            body: response.into_string().unwrap_or_default(),
        }
    })
    .await
    .unwrap()
}

fn records(value: Value) -> Vec<Record> {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn empty_new_products_table_shows_empty_state() {
    let source = StaticSource::from_json(&json!({"new-product": {"records": []}})).unwrap();
    let base = serve(source).await;

    let reply = get(format!("{base}/new-products")).await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("暫無產品"));
    assert!(reply.body.contains("此分類目前沒有可用的產品，請稍後再試"));
    assert!(reply.body.contains("<title>最新商品 | KRD MICGO</title>"));
}

#[tokio::test]
async fn navigation_entry_missing_path_is_dropped() {
    let source = StaticSource::new().with_table(
        "navigation",
        records(json!([
            {"id": "n1", "fields": {"title": "KRD", "path": "/krd-products"}},
            {"id": "n2", "fields": {"title": "MICGO"}}
        ])),
    );
    let base = serve(source).await;

    let reply = get(format!("{base}/krd-products")).await;
    assert_eq!(reply.body.matches("data-nav-path=").count(), 1);
    assert!(reply.body.contains("nav-button is-active"));
    assert!(!reply.body.contains(">MICGO</a>"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let base = serve(StaticSource::new()).await;
    let reply = get(format!("{base}/products")).await;
    assert_eq!(reply.status, 404);
    assert_eq!(reply.body, "not found");
}

#[tokio::test]
async fn catalog_query_selects_view_sort_and_zoom() {
    let source = StaticSource::new().with_table(
        "trumpet",
        records(json!([
            {"id": "t1", "fields": {"img_url": "https://img.example/z.jpg", "name": "Zeta"}},
            {"id": "t2", "fields": {"img_url": "https://img.example/a.jpg", "name": "alpha"}}
        ])),
    );
    let base = serve(source).await;

    let sorted = get(format!("{base}/trumpet?view=list&sort=name")).await;
    assert!(sorted.body.contains("class=\"product-list\""));
    let alpha = sorted.body.find("data-product=\"t2\"").unwrap();
    let zeta = sorted.body.find("data-product=\"t1\"").unwrap();
    assert!(alpha < zeta);

    let newest = get(format!("{base}/trumpet?sort=newest")).await;
    let alpha = newest.body.find("data-product=\"t2\"").unwrap();
    let zeta = newest.body.find("data-product=\"t1\"").unwrap();
    assert!(zeta < alpha);
    assert!(newest.body.contains("class=\"product-grid\""));

    let zoomed = get(format!("{base}/trumpet?zoom=t1")).await;
    assert!(zoomed.body.contains("<body class=\"scroll-locked\">"));
    assert!(zoomed.body.contains("image-modal is-open"));

    let bogus = get(format!("{base}/trumpet?view=tiles&zoom=missing")).await;
    assert_eq!(bogus.status, 200);
    assert!(bogus.body.contains("class=\"product-grid\""));
    assert!(!bogus.body.contains("image-modal is-open"));
}

#[tokio::test]
async fn encoded_query_values_reach_the_page() {
    let source = StaticSource::new().with_table(
        "trumpet",
        records(json!([
            {"id": "rec 1/2", "fields": {"img_url": "https://img.example/m.jpg", "name": "無線"}}
        ])),
    );
    let base = serve(source).await;

    let zoomed = get(format!("{base}/trumpet?view=%6Cist&zoom=rec+1%2F2")).await;
    assert_eq!(zoomed.status, 200);
    assert!(zoomed.body.contains("image-modal is-open"));
    assert!(zoomed.body.contains("class=\"product-list\""));
    assert!(zoomed.body.contains("zoom=rec+1%2F2"));

    let malformed = get(format!("{base}/trumpet?zoom=%zz&view=list")).await;
    assert_eq!(malformed.status, 200);
    assert!(!malformed.body.contains("image-modal is-open"));
}

#[tokio::test]
async fn failing_table_still_renders_page() {
    let source = StaticSource::new()
        .with_failure("krd", FetchError::Transport("connection refused".to_string()))
        .with_failure(
            "navigation",
            FetchError::Status {
                status: 401,
                body: "{}".to_string(),
            },
        );
    let base = serve(source).await;

    let reply = get(format!("{base}/krd-products")).await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("暫無產品"));
    assert_eq!(reply.body.matches("side-menu-item is-placeholder").count(), 4);
}

#[tokio::test]
async fn home_selects_slides_from_query() {
    let source = StaticSource::new().with_table(
        "hot-products-1",
        records(json!([
            {"id": "h1", "fields": {"img_url": "1.jpg"}},
            {"id": "h2", "fields": {"img_url": "2.jpg"}}
        ])),
    );
    let base = serve(source).await;

    let reply = get(format!("{base}/?hot=3")).await;
    assert!(reply.body.contains("data-carousel=\"hot\" data-interval=\"5000\" data-index=\"1\""));
    assert_eq!(reply.body.matches("載入產品中...").count(), 1);
}

#[tokio::test]
async fn about_page_and_runtime_script_are_served() {
    let base = serve(StaticSource::new()).await;

    let about = get(format!("{base}/abouts")).await;
    assert_eq!(about.status, 200);
    assert!(about.body.contains("我們的服務"));
    assert!(about.body.contains("<script src=\"/__krd/runtime.js\" defer></script>"));

    let js = get(format!("{base}/__krd/runtime.js")).await;
    assert_eq!(js.status, 200);
    assert_eq!(js.content_type, "application/javascript");
    assert!(js.body.contains("window.__KRD__"));
}
