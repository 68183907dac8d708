//! OrgChat: Axum + HTMX
//!
//! A single-page chat client for a directory of organizations (hospitals,
//! banks, hotels, agencies, small businesses). Users browse or search the
//! directory, open a conversation, and exchange messages with a simulated
//! agent whose replies and delivery receipts arrive on timers.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server with HTML fragments and SSE streaming
//! - **Sessions**: One controller per page, holding selection and messages
//! - **UI**: Server-rendered HTML + HTMX + Alpine.js
//!
//! # Modules
//!
//! - [`directory`]: Organizations, chat histories and lookups
//! - [`filter`]: Case-insensitive search over the directory
//! - [`session`]: Page controllers and the simulated message lifecycle
//! - [`events`]: Change events and their SSE encoding
//! - [`ui`]: HTML rendering
//! - [`server`]: Routes and handlers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::assigning_clones)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod filter;
pub mod server;
pub mod session;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use directory::Directory;
use session::SessionStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Seeded organizations and chat histories.
    pub directory: Arc<Directory>,
    /// Session store for page controllers.
    pub sessions: SessionStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Seed the directory and create an empty session store.
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        let directory = Arc::new(Directory::seeded());
        let sessions = SessionStore::new(Arc::clone(&directory), config.lifecycle.timing());
        Self {
            directory,
            sessions,
            config,
        }
    }
}
