//! KitchenFeed - realtime order invalidation
//!
//! The service pushes a message on the kitchen WebSocket whenever anything
//! about a branch's orders changes. Message content is never inspected: every
//! message, whatever its shape, means "refetch the board". Three sources feed
//! the same event stream:
//!
//! 1. WebSocket messages, for near-instant updates
//! 2. one delayed event after the socket drops (no reconnect attempts)
//! 3. a periodic polling tick as backstop
//!
//! The consumer treats all three identically, so a lost or garbled socket
//! degrades to polling instead of a stale board.

use async_trait::async_trait;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;

use crate::ClientResult;
use crate::config::ClientConfig;

/// Event emitted by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    /// Board state may have changed; refetch from the service.
    Invalidated,
}

/// Source of invalidation signals
#[async_trait]
pub trait FeedTransport: Send {
    /// Next signal, or `None` once the connection has closed.
    async fn next_signal(&mut self) -> Option<()>;
}

/// WebSocket-backed transport
pub struct WsFeedTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsFeedTransport {
    /// Connect to the kitchen feed for one branch.
    pub async fn connect(config: &ClientConfig, branch_id: &str) -> ClientResult<Self> {
        let url = format!("{}/orders/ws/kitchen/{branch_id}", config.effective_ws_url());
        tracing::debug!(%url, "Connecting kitchen feed");
        let (stream, _) = tokio_tungstenite::connect_async(&url).await?;
        Ok(Self { stream })
    }
}

#[async_trait]
impl FeedTransport for WsFeedTransport {
    async fn next_signal(&mut self) -> Option<()> {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(_))) | Some(Ok(Message::Binary(_))) => return Some(()),
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("Kitchen feed closed by server");
                    return None;
                }
                Some(Ok(_)) => {} // Ping, Pong — ignore
                Some(Err(e)) => {
                    tracing::warn!("Kitchen feed error: {e}");
                    return None;
                }
                None => {
                    tracing::info!("Kitchen feed stream ended");
                    return None;
                }
            }
        }
    }
}

/// Handle to a running feed task
pub struct FeedHandle {
    events: mpsc::Receiver<FeedEvent>,
}

impl FeedHandle {
    /// Next event; `None` once the feed task has stopped.
    pub async fn recv(&mut self) -> Option<FeedEvent> {
        self.events.recv().await
    }
}

/// Kitchen feed task
pub struct KitchenFeed;

impl KitchenFeed {
    /// Start the feed for one branch.
    ///
    /// A failed WebSocket connect is not fatal: the task still runs with the
    /// polling backstop plus one delayed event, the same degradation as a
    /// socket that drops later.
    pub async fn spawn(
        config: &ClientConfig,
        branch_id: &str,
        shutdown: CancellationToken,
    ) -> FeedHandle {
        let transport = match WsFeedTransport::connect(config, branch_id).await {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(branch_id, "Kitchen feed connect failed, polling only: {e}");
                None
            }
        };
        Self::spawn_with_transport(
            transport,
            Duration::from_secs(config.poll_interval),
            Duration::from_secs(config.resync_delay),
            shutdown,
        )
    }

    /// Start the feed over an already-established transport.
    pub fn spawn_with_transport<T: FeedTransport + 'static>(
        transport: Option<T>,
        poll_interval: Duration,
        resync_delay: Duration,
        shutdown: CancellationToken,
    ) -> FeedHandle {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(run_feed(transport, poll_interval, resync_delay, tx, shutdown));
        FeedHandle { events: rx }
    }
}

async fn run_feed<T: FeedTransport>(
    mut transport: Option<T>,
    poll_interval: Duration,
    resync_delay: Duration,
    tx: mpsc::Sender<FeedEvent>,
    shutdown: CancellationToken,
) {
    let mut poll = tokio::time::interval(poll_interval);
    poll.tick().await; // skip immediate tick

    // When the transport is absent from the start (connect failed) the single
    // delayed resync is scheduled immediately, mirroring a drop at t=0.
    let mut resync_at: Option<Instant> =
        transport.is_none().then(|| Instant::now() + resync_delay);

    loop {
        let resync_deadline =
            resync_at.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::debug!("Kitchen feed shutting down");
                return;
            }

            // Polling backstop
            _ = poll.tick() => {
                if tx.send(FeedEvent::Invalidated).await.is_err() {
                    return;
                }
            }

            // Single post-disconnect resync
            _ = tokio::time::sleep_until(resync_deadline), if resync_at.is_some() => {
                resync_at = None;
                if tx.send(FeedEvent::Invalidated).await.is_err() {
                    return;
                }
            }

            // Live socket signal
            signal = next_from(&mut transport), if transport.is_some() => {
                match signal {
                    Some(()) => {
                        if tx.send(FeedEvent::Invalidated).await.is_err() {
                            return;
                        }
                    }
                    None => {
                        transport = None;
                        resync_at = Some(Instant::now() + resync_delay);
                    }
                }
            }
        }
    }
}

async fn next_from<T: FeedTransport>(transport: &mut Option<T>) -> Option<()> {
    match transport {
        Some(t) => t.next_signal().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Transport fed from a channel; closing the channel closes the transport.
    struct ChannelTransport {
        rx: mpsc::UnboundedReceiver<()>,
    }

    #[async_trait]
    impl FeedTransport for ChannelTransport {
        async fn next_signal(&mut self) -> Option<()> {
            self.rx.recv().await
        }
    }

    fn channel_transport() -> (mpsc::UnboundedSender<()>, ChannelTransport) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, ChannelTransport { rx })
    }

    #[tokio::test(start_paused = true)]
    async fn test_any_message_invalidates() {
        let (tx, transport) = channel_transport();
        let shutdown = CancellationToken::new();
        let mut handle = KitchenFeed::spawn_with_transport(
            Some(transport),
            Duration::from_secs(15),
            Duration::from_secs(3),
            shutdown.clone(),
        );

        tx.send(()).unwrap();
        assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));
        tx.send(()).unwrap();
        assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));

        shutdown.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_closure_schedules_one_delayed_resync() {
        let (tx, transport) = channel_transport();
        let shutdown = CancellationToken::new();
        let mut handle = KitchenFeed::spawn_with_transport(
            Some(transport),
            Duration::from_secs(15),
            Duration::from_secs(3),
            shutdown.clone(),
        );

        drop(tx); // socket drops

        // The resync fires after 3s (well before the 15s poll tick).
        let start = Instant::now();
        assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_secs(15));

        // The next event is the poll backstop, not a second resync.
        assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));
        assert!(start.elapsed() >= Duration::from_secs(15));

        shutdown.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_backstop_without_transport() {
        let shutdown = CancellationToken::new();
        let mut handle = KitchenFeed::spawn_with_transport::<ChannelTransport>(
            None,
            Duration::from_secs(15),
            Duration::from_secs(3),
            shutdown.clone(),
        );

        // Failed connect behaves like an immediate drop: resync at 3s,
        // then the poll tick at 15s.
        let start = Instant::now();
        assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));
        assert!(start.elapsed() >= Duration::from_secs(3));

        assert_eq!(handle.recv().await, Some(FeedEvent::Invalidated));
        assert!(start.elapsed() >= Duration::from_secs(15));

        shutdown.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_the_feed() {
        let (_tx, transport) = channel_transport();
        let shutdown = CancellationToken::new();
        let mut handle = KitchenFeed::spawn_with_transport(
            Some(transport),
            Duration::from_secs(15),
            Duration::from_secs(3),
            shutdown.clone(),
        );

        shutdown.cancel();
        assert_eq!(handle.recv().await, None);
    }
}
