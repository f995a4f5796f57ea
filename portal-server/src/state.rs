// portal-server/src/state.rs
use std::sync::Arc;

use common::session::SessionManager;
use common::store::{FileStore, MemoryStore, SessionStore};
use common::Config;

/// Shared application state: the session manager over its injected
/// storage backend.
pub struct PortalState {
    pub sessions: SessionManager,
}

impl PortalState {
    /// Production state: sessions persisted under the configured
    /// storage directory so logins survive a server restart.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileStore::new(config.session.storage_path.clone()));
        let expire_ms = config.session.expire_days * 24 * 60 * 60 * 1000;
        Self {
            sessions: SessionManager::new(store).with_expire_ms(expire_ms),
        }
    }

    /// In-memory state for tests.
    pub fn in_memory() -> Self {
        Self {
            sessions: SessionManager::new(Arc::new(MemoryStore::new())),
        }
    }
}
