//! In-memory diagram store backed by moka.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use graphview_core::config::SessionConfig;
use graphview_core::types::SessionId;
use graphview_entity::SessionDiagram;

/// Per-session diagram storage with idle expiry and last-write-wins updates.
#[derive(Debug, Clone)]
pub struct DiagramSessionStore {
    cache: Cache<SessionId, Arc<SessionDiagram>>,
}

impl DiagramSessionStore {
    /// Creates a store from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(Duration::from_secs(config.idle_timeout_minutes * 60))
            .build();
        Self { cache }
    }

    /// Returns the session's diagram, if one is stored.
    pub async fn get(&self, session: SessionId) -> Option<Arc<SessionDiagram>> {
        self.cache.get(&session).await
    }

    /// Stores a diagram for the session, replacing any previous one.
    pub async fn put(&self, session: SessionId, diagram: SessionDiagram) {
        debug!(
            session_id = %session,
            format_type = diagram.format_type.as_deref().unwrap_or(""),
            bytes = diagram.content.len(),
            "Storing session diagram"
        );
        self.cache.insert(session, Arc::new(diagram)).await;
    }
}
