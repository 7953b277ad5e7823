//! POS Client - service access for the staff front end
//!
//! Typed HTTP calls to the POS service, persisted sign-in state, and the
//! realtime kitchen feed. All domain types come from `shared`.

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod http;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use feed::{FeedEvent, FeedHandle, FeedTransport, KitchenFeed, WsFeedTransport};
pub use session::SessionStore;
