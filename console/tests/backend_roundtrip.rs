//! End-to-end checks of the reqwest transport against a local fake backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use erp_console::core::service::{HttpMethod, KeyValueStore};
use erp_console::services::api::{sales, ApiClient, ReqwestTransport};
use erp_console::services::storage::{MemoryStore, TOKEN_KEY};
use erp_console::ErrorKind;
use shared::{CustomersRequest, RequestEnvelope, Scope};

#[derive(Debug, Default, Clone)]
struct Seen {
    fields: Vec<(String, String)>,
    accept: Option<String>,
    authorization: Option<String>,
}

type Captured = Arc<Mutex<Vec<Seen>>>;

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn customers(
    State(captured): State<Captured>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Json<Value> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap();
        fields.push((name, value));
    }
    captured.lock().unwrap().push(Seen {
        fields,
        accept: header(&headers, "accept"),
        authorization: header(&headers, "authorization"),
    });

    Json(json!({
        "flag": true,
        "customers": [{"customerid": 77, "customer_name": "Anil Traders", "amount": "1500.50"}]
    }))
}

async fn areas(
    State(captured): State<Captured>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut fields: Vec<_> = params.into_iter().collect();
    fields.sort();
    captured.lock().unwrap().push(Seen {
        fields,
        ..Seen::default()
    });
    Json(json!({"flag": false, "msg": "No data found"}))
}

async fn spawn_backend(captured: Captured) -> String {
    let app = Router::new()
        .route("/customers.php", post(customers))
        .route("/areas.php", get(areas))
        .route(
            "/stocks.php",
            post(|| async { "SELECT * FROM stock WHERE officeid = '1'" }),
        )
        .route("/broken.php", post(|| async { "<html>Fatal error</html>" }))
        .route(
            "/down.php",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
        )
        .with_state(captured);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn scope() -> Scope {
    Scope {
        officecode: "WF01".to_string(),
        officeid: "1".to_string(),
        financialyearid: "2".to_string(),
    }
}

async fn client_with_token(token: Option<&str>) -> (ApiClient, Captured) {
    let captured = Captured::default();
    let base_url = spawn_backend(captured.clone()).await;
    let storage = Arc::new(MemoryStore::new());
    if let Some(token) = token {
        storage.set(TOKEN_KEY, token).unwrap();
    }
    let client = ApiClient::new(base_url, Arc::new(ReqwestTransport::new()), storage);
    (client, captured)
}

#[tokio::test]
async fn test_multipart_post_carries_fields_and_headers() {
    let (client, captured) = client_with_token(Some("tok-1")).await;

    let request = CustomersRequest {
        scope: scope(),
        empid: "4".to_string(),
    };
    let envelope = sales::get_customers(&client, &request).await.unwrap();

    assert_eq!(envelope.flag(), Some(true));
    let seen = captured.lock().unwrap()[0].clone();
    assert_eq!(
        seen.fields,
        vec![
            ("officecode".to_string(), "WF01".to_string()),
            ("officeid".to_string(), "1".to_string()),
            ("financialyearid".to_string(), "2".to_string()),
            ("empid".to_string(), "4".to_string()),
        ]
    );
    assert_eq!(seen.accept.as_deref(), Some("application/json"));
    assert_eq!(seen.authorization.as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let (client, captured) = client_with_token(None).await;

    let request = CustomersRequest {
        scope: scope(),
        empid: "4".to_string(),
    };
    sales::get_customers(&client, &request).await.unwrap();

    assert_eq!(captured.lock().unwrap()[0].authorization, None);
}

#[tokio::test]
async fn test_get_sends_query_and_flag_false_is_api_logic() {
    let (client, captured) = client_with_token(None).await;

    let err = client
        .send_with("areas.php", HttpMethod::Get, &RequestEnvelope::from(&scope().office()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ApiLogic);
    assert_eq!(err.to_string(), "No data found");
    assert_eq!(
        captured.lock().unwrap()[0].fields,
        vec![
            ("officecode".to_string(), "WF01".to_string()),
            ("officeid".to_string(), "1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_sql_html_and_status_failures_are_classified() {
    let (client, _) = client_with_token(None).await;
    let body = RequestEnvelope::from(&scope());

    let err = client.send("stocks.php", &body).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BackendMisconfiguration);
    assert!(!err.to_string().contains("SELECT"));

    let err = client.send("broken.php", &body).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert!(err.to_string().contains("<html>Fatal error</html>"));

    let err = client.send("down.php", &body).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");

    let err = client.send("nowhere.php", &body).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(
        format!("http://{addr}"),
        Arc::new(ReqwestTransport::new()),
        Arc::new(MemoryStore::new()),
    );
    let err = client
        .send("login.php", &RequestEnvelope::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
}
