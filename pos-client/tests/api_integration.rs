// pos-client/tests/api_integration.rs
// Exercises the API client against an in-process stub service.

use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::json;

use pos_client::{ApiClient, ClientConfig, ClientError};
use shared::models::{OrderStatus, PaymentMethod, StaffRole};

#[derive(Clone, Default)]
struct StubState {
    /// Authorization header of the most recent request
    last_auth: Arc<Mutex<Option<String>>>,
    /// Raw body of the most recent status update
    last_status_body: Arc<Mutex<Option<serde_json::Value>>>,
    /// Raw body of the most recent payment
    last_pay_body: Arc<Mutex<Option<serde_json::Value>>>,
    /// Raw body of the most recent password change
    last_password_body: Arc<Mutex<Option<serde_json::Value>>>,
}

async fn login(Form(form): Form<serde_json::Value>) -> Json<serde_json::Value> {
    assert_eq!(form["username"], "9876543210");
    assert_eq!(form["password"], "secret");
    Json(json!({
        "access_token": "tok-abc",
        "token_type": "bearer",
        "role": "CASHIER",
        "name": "Asha",
        "branch_id": "b-1"
    }))
}

async fn list_orders(State(state): State<StubState>, headers: HeaderMap) -> Json<serde_json::Value> {
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .map(|v| v.to_str().unwrap().to_string());
    Json(json!([{
        "id": "o-1",
        "order_number": "ORD-1",
        "table_id": "t-1",
        "status": "NEW",
        "total": 100.0,
        "created_at": "2025-11-02T12:00:00Z",
        "items": []
    }]))
}

async fn update_status(
    State(state): State<StubState>,
    Path(order_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    *state.last_status_body.lock().unwrap() = Some(body.clone());
    Json(json!({
        "id": order_id,
        "order_number": "ORD-1",
        "table_id": "t-1",
        "status": body["status"],
        "total": 100.0,
        "created_at": "2025-11-02T12:00:00Z",
        "items": []
    }))
}

async fn list_tables() -> Json<serde_json::Value> {
    Json(json!([
        {"id": "t-1", "branch_id": "b-1", "table_number": 1, "is_active": true},
        {"id": "t-broken", "branch_id": "b-1", "table_number": 2, "is_active": true},
        {"id": "t-3", "branch_id": "b-1", "table_number": 3, "is_active": true}
    ]))
}

async fn open_bills(Path(table_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    match table_id.as_str() {
        "t-broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "session corrupt"})),
        ),
        "t-1" => (
            StatusCode::OK,
            Json(json!([{
                "id": "bill-1", "bill_number": "BILL-1", "table_id": "t-1",
                "subtotal": 400.0, "cgst_amount": 36.0, "sgst_amount": 36.0,
                "total": 472.0, "status": "UNPAID",
                "created_at": "2025-11-02T13:00:00Z"
            }])),
        ),
        _ => (StatusCode::OK, Json(json!([]))),
    }
}

async fn pay(
    State(state): State<StubState>,
    Path(bill_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    *state.last_pay_body.lock().unwrap() = Some(body.clone());
    assert_eq!(bill_id, "bill-1");
    Json(json!({"ok": true, "bill_number": "BILL-1", "amount_paid": body["amount"]}))
}

async fn me(State(state): State<StubState>, headers: HeaderMap) -> Json<serde_json::Value> {
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .map(|v| v.to_str().unwrap().to_string());
    Json(json!({
        "id": "s-1",
        "name": "Asha",
        "phone": "9876543210",
        "role": "CASHIER",
        "branch_id": "b-1",
        "is_active": true
    }))
}

async fn change_password(
    State(state): State<StubState>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    *state.last_password_body.lock().unwrap() = Some(body);
    Json(json!({"ok": true}))
}

async fn rejected_login() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Invalid phone or password"})),
    )
}

async fn start_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn stub_router(state: StubState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/change-password", post(change_password))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{order_id}/status", patch(update_status))
        .route("/api/admin/tables", get(list_tables))
        .route("/api/billing/table/{table_id}/open", get(open_bills))
        .route("/api/billing/{bill_id}/pay", post(pay))
        .with_state(state)
}

#[tokio::test]
async fn test_login_installs_bearer_token() {
    let state = StubState::default();
    let base = start_stub(stub_router(state.clone())).await;

    let mut client = ApiClient::new(ClientConfig::new(&base)).unwrap();
    let profile = client.login("9876543210", "secret").await.unwrap();
    assert_eq!(profile.name, "Asha");
    assert_eq!(client.token(), Some("tok-abc"));

    let orders = client.list_orders("b-1").await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(
        state.last_auth.lock().unwrap().as_deref(),
        Some("Bearer tok-abc")
    );
}

#[tokio::test]
async fn test_login_failure_surfaces_detail() {
    let base = start_stub(Router::new().route("/api/auth/login", post(rejected_login))).await;

    let mut client = ApiClient::new(ClientConfig::new(&base)).unwrap();
    let err = client.login("9876543210", "wrong").await.unwrap_err();
    match err {
        ClientError::Api { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail, "Invalid phone or password");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_me_returns_staff_for_installed_token() {
    let state = StubState::default();
    let base = start_stub(stub_router(state.clone())).await;

    let mut client = ApiClient::new(ClientConfig::new(&base)).unwrap();
    client.login("9876543210", "secret").await.unwrap();

    let staff = client.me().await.unwrap();
    assert_eq!(staff.name, "Asha");
    assert_eq!(staff.role, StaffRole::Cashier);
    assert!(staff.is_active);
    assert_eq!(
        state.last_auth.lock().unwrap().as_deref(),
        Some("Bearer tok-abc")
    );
}

#[tokio::test]
async fn test_change_password_posts_both_fields() {
    let state = StubState::default();
    let base = start_stub(stub_router(state.clone())).await;
    let client = ApiClient::new(ClientConfig::new(&base)).unwrap();

    client.change_password("old-pass", "new-pass").await.unwrap();

    let body = state.last_password_body.lock().unwrap().clone().unwrap();
    assert_eq!(body, json!({"old_password": "old-pass", "new_password": "new-pass"}));
}

#[tokio::test]
async fn test_advance_sends_successor_status() {
    let state = StubState::default();
    let base = start_stub(stub_router(state.clone())).await;

    let client = ApiClient::new(ClientConfig::new(&base)).unwrap();
    let orders = client.list_orders("b-1").await.unwrap();
    assert_eq!(orders[0].status, OrderStatus::New);

    let updated = client.advance_order(&orders[0]).await.unwrap();
    assert_eq!(updated.status, OrderStatus::Accepted);
    assert_eq!(
        state.last_status_body.lock().unwrap().clone().unwrap(),
        json!({"status": "ACCEPTED"})
    );
}

#[tokio::test]
async fn test_advance_refuses_terminal_order() {
    let base = start_stub(stub_router(StubState::default())).await;
    let client = ApiClient::new(ClientConfig::new(&base)).unwrap();

    let mut orders = client.list_orders("b-1").await.unwrap();
    orders[0].status = OrderStatus::Served;
    assert!(client.advance_order(&orders[0]).await.is_err());
}

#[tokio::test]
async fn test_unpaid_bills_skips_failing_table() {
    let base = start_stub(stub_router(StubState::default())).await;
    let client = ApiClient::new(ClientConfig::new(&base)).unwrap();

    let bills = client.unpaid_bills("b-1").await.unwrap();
    // t-1 has one bill, t-broken fails and is skipped, t-3 is empty.
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].0.table_number, 1);
    assert_eq!(bills[0].1[0].bill_number, "BILL-1");
}

#[tokio::test]
async fn test_unpaid_bills_strict_mode_propagates() {
    let base = start_stub(stub_router(StubState::default())).await;
    let config = ClientConfig::new(&base).with_strict_errors(true);
    let client = ApiClient::new(config).unwrap();

    let err = client.unpaid_bills("b-1").await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_pay_bill_posts_payment_request() {
    let state = StubState::default();
    let base = start_stub(stub_router(state.clone())).await;
    let client = ApiClient::new(ClientConfig::new(&base)).unwrap();

    let receipt = client
        .pay_bill("bill-1", PaymentMethod::Upi, 472.0, Some("UTR123".into()))
        .await
        .unwrap();
    assert!(receipt.ok);
    assert_eq!(receipt.amount_paid, 472.0);

    let body = state.last_pay_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["method"], "UPI");
    assert_eq!(body["upi_reference_id"], "UTR123");
}
