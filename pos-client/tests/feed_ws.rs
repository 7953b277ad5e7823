// pos-client/tests/feed_ws.rs
// Kitchen feed against a real in-process WebSocket endpoint.

use axum::Router;
use axum::extract::Path;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use axum::routing::any;
use tokio_util::sync::CancellationToken;

use pos_client::{ClientConfig, FeedEvent, KitchenFeed};

async fn kitchen_ws(ws: WebSocketUpgrade, Path(branch_id): Path<String>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, branch_id))
}

async fn handle_socket(mut socket: WebSocket, branch_id: String) {
    assert_eq!(branch_id, "b-1");
    // Payload shape is irrelevant to the client; send something arbitrary.
    let _ = socket
        .send(Message::Text(r#"{"type":"order_update"}"#.into()))
        .await;
    let _ = socket.send(Message::Text("not json at all".into())).await;
    // Hold briefly so both messages are observed before the close.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}

async fn start_stub() -> String {
    let app = Router::new().route("/api/orders/ws/kitchen/{branch_id}", any(kitchen_ws));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

#[tokio::test]
async fn test_feed_emits_on_every_message_then_resyncs_once_on_close() {
    let base = start_stub().await;
    let config = ClientConfig::new(&base)
        .with_poll_interval(60)
        .with_resync_delay(0);
    let shutdown = CancellationToken::new();

    let mut handle = KitchenFeed::spawn(&config, "b-1", shutdown.clone()).await;

    // One event per message, content never inspected.
    assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));
    assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));

    // Server closes the socket: exactly one resync event follows.
    assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));

    // No reconnect, no further events until the (distant) poll tick.
    let quiet =
        tokio::time::timeout(std::time::Duration::from_millis(300), handle.recv()).await;
    assert!(quiet.is_err());

    shutdown.cancel();
}

#[tokio::test]
async fn test_feed_degrades_to_polling_when_connect_fails() {
    // Nothing is listening on this port.
    let config = ClientConfig::new("http://127.0.0.1:1/api")
        .with_poll_interval(60)
        .with_resync_delay(0);
    let shutdown = CancellationToken::new();

    let mut handle = KitchenFeed::spawn(&config, "b-1", shutdown.clone()).await;

    // The single scheduled resync still arrives.
    assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));

    shutdown.cancel();
}
