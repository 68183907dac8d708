//! Page controllers and their storage.
//!
//! Each browser page gets a [`ChatSession`]: the selected organization or
//! chat, the transient message list, and the typing flag. Sends run a
//! simulated delivery sequence on Tokio timers (see [`LifecycleTiming`]).
//! Sessions are held in a [`SessionStore`] keyed by UUID.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use orgchat::directory::Directory;
//! use orgchat::session::{LifecycleTiming, SessionStore};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = SessionStore::new(Arc::new(Directory::seeded()), LifecycleTiming::default());
//! let session = store.create();
//!
//! let snapshot = session.select_organization("1").await.unwrap();
//! assert_eq!(snapshot.messages.len(), 6);
//! # }
//! ```

mod controller;
mod lifecycle;
mod store;

pub use controller::{ChatSession, ConversationSnapshot};
pub use lifecycle::{LifecycleTiming, canned_reply};
pub use store::SessionStore;
