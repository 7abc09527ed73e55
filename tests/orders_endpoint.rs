use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use order_board::board::OrderBoard;
use order_board::client::{FetchError, OrderSource, OrdersClient};
use order_board::config::{ApiConfig, RenderConfig};
use order_board::view::{Element, HtmlPage, ViewState};

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{}", addr)
}

fn api(base_url: String, timeout_secs: Option<u64>) -> ApiConfig {
    ApiConfig {
        base_url,
        orders_path: "/v1/orders".to_string(),
        timeout_secs,
    }
}

async fn board_for(app: Router) -> OrderBoard<OrdersClient, order_board::view::PageElement> {
    let base = serve(app).await;
    let client = OrdersClient::new(&api(base, Some(5))).expect("client");
    OrderBoard::new(client, HtmlPage::page(), &RenderConfig::default())
}

#[tokio::test]
async fn mixed_schema_orders_are_rendered() {
    let app = Router::new().route(
        "/v1/orders",
        get(|| async {
            Json(json!([
                {
                    "id": "9c1e77aa",
                    "uuid": "9c1e77aa-1111-2222-3333-444455556666",
                    "title": "Паллеты",
                    "customer": "ИП Орлов",
                    "phone": "+7 902 222-22-22",
                    "from": "Москва",
                    "to": "Тверь",
                    "weight": 800,
                    "dimensions": "120×80×100 см",
                    "price": 12000,
                    "date": "10.02.2024",
                    "tags": "Нет тегов"
                },
                {
                    "uuid": "5d0b3f21-aaaa-bbbb-cccc-ddddeeeeffff",
                    "title": "Холодильник",
                    "customer_name": "Анна",
                    "from_location": "Пермь",
                    "to_location": "Уфа",
                    "weight_kg": 95.5,
                    "length_cm": 70, "width_cm": 60, "height_cm": 185,
                    "price": 7000,
                    "created_at": "2024-01-05T00:00:00Z",
                    "date": "01.01.2000",
                    "tags": ["хрупкое", "до двери"]
                }
            ]))
        }),
    );

    let mut board = board_for(app).await;
    assert_eq!(board.load().await, ViewState::Loaded);

    let page = board.into_view();
    assert_eq!(page.visible(), Some(ViewState::Loaded));

    let html = page.orders.inner_html();
    assert_eq!(html.matches(r#"<div class="order-card">"#).count(), 2);
    assert!(html.contains("#9c1e77aa"));
    assert!(html.contains("#5d0b3f21"));
    assert!(html.contains("Москва → Тверь"));
    assert!(html.contains("95.5 кг"));
    assert!(html.contains("70×60×185 см"));
    assert!(html.contains("05.01.2024"));
    assert!(!html.contains("01.01.2000"));
    assert_eq!(html.matches(r#"<span class="tag">"#).count(), 2);
}

#[tokio::test]
async fn empty_list_shows_placeholder() {
    let app = Router::new().route("/v1/orders", get(|| async { Json(json!([])) }));

    let mut board = board_for(app).await;
    assert_eq!(board.load().await, ViewState::Loaded);
    assert!(board.view().orders.inner_html().contains("Заказов не найдено"));
}

#[tokio::test]
async fn null_body_shows_placeholder() {
    let app = Router::new().route("/v1/orders", get(|| async { Json(json!(null)) }));

    let mut board = board_for(app).await;
    assert_eq!(board.load().await, ViewState::Loaded);
    assert!(board.view().orders.inner_html().contains("Заказов не найдено"));
}

#[tokio::test]
async fn falsy_body_shows_placeholder() {
    let app = Router::new().route("/v1/orders", get(|| async { Json(json!(false)) }));

    let mut board = board_for(app).await;
    assert_eq!(board.load().await, ViewState::Loaded);
    assert!(board.view().orders.inner_html().contains("Заказов не найдено"));
}

#[tokio::test]
async fn server_error_shows_error_view() {
    let app = Router::new().route(
        "/v1/orders",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Внутренняя ошибка сервера") }),
    );

    let mut board = board_for(app).await;
    assert_eq!(board.load().await, ViewState::Error);

    let page = board.into_view();
    assert_eq!(page.visible(), Some(ViewState::Error));
    assert_eq!(page.orders.inner_html(), "");
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let base = serve(Router::new()).await;
    let client = OrdersClient::new(&api(base, Some(5))).expect("client");

    match client.fetch_orders().await {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected 404, got {:?}", other.map(|o| o.map(|v| v.len()))),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = Router::new().route(
        "/v1/orders",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "application/json")],
                "[{\"id\": ",
            )
                .into_response()
        }),
    );

    let base = serve(app).await;
    let client = OrdersClient::new(&api(base, Some(5))).expect("client");

    assert!(matches!(client.fetch_orders().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OrdersClient::new(&api(format!("http://{}", addr), Some(5))).expect("client");
    assert!(matches!(client.fetch_orders().await, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn slow_backend_times_out_into_error_view() {
    let app = Router::new().route(
        "/v1/orders",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!([]))
        }),
    );

    let base = serve(app).await;
    let client = OrdersClient::new(&api(base, Some(1))).expect("client");
    let mut board = OrderBoard::new(client, HtmlPage::page(), &RenderConfig::default());

    assert_eq!(board.load().await, ViewState::Error);
}

#[tokio::test]
async fn document_reflects_final_state() {
    let app = Router::new().route("/v1/orders", get(|| async { Json(json!([{ "title": "Груз" }])) }));

    let mut board = board_for(app).await;
    board.load().await;

    let doc = board.into_view().to_document("Заказы");
    assert!(doc.contains(r#"<div id="loading" class="loading hidden">"#));
    assert!(doc.contains(r#"<div id="error" class="error hidden">"#));
    assert!(doc.contains(r#"<div id="orders" class="orders">"#));
    assert!(doc.contains("Груз"));
}
