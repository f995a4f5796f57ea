// common/src/session.rs
use std::sync::Arc;

use crate::errors::{PortalError, StoreError};
use crate::models::account::validate_credentials;
use crate::models::session::{LoginState, Session, LOGIN_EXPIRE_MS, STORAGE_KEY};
use crate::store::SessionStore;
use crate::utils::now_ms;

/// Manages the portal's single login record: credential validation,
/// persistence, lazy expiry and logout.
///
/// Expiry is only ever checked when the record is read; there is no
/// background sweep. At most one session exists at a time, so a new
/// login simply overwrites the previous record.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    expire_ms: i64,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            expire_ms: LOGIN_EXPIRE_MS,
        }
    }

    /// Override the expiry window (milliseconds); wired to the
    /// `session.expire_days` config key.
    pub fn with_expire_ms(mut self, expire_ms: i64) -> Self {
        self.expire_ms = expire_ms;
        self
    }

    /// Validate credentials and persist a fresh login record.
    ///
    /// An invalid pair has no side effect at all; a pre-existing
    /// session is left untouched. A failed persist is reported as a
    /// storage error, which callers treat as "not logged in".
    pub fn login(&self, student_id: &str, password: &str) -> Result<Session, PortalError> {
        let account =
            validate_credentials(student_id, password).ok_or(PortalError::InvalidCredentials)?;

        let state = LoginState {
            student_id: account.student_id.to_string(),
            vm_number: account.vm_number.to_string(),
            edge_server_url: account.edge_server_url.to_string(),
            dify_url: account.dify_url.to_string(),
            expire_time: now_ms() + self.expire_ms,
        };

        let json = serde_json::to_string(&state)
            .map_err(|e| StoreError::Unavailable(format!("serialize login state: {}", e)))?;
        self.store.set(STORAGE_KEY, &json)?;

        tracing::info!("Student logged in: {} (vm {})", state.student_id, state.vm_number);
        Ok(Session::from(&state))
    }

    /// The current session, if any.
    ///
    /// An expired record is deleted on sight. A malformed or unreadable
    /// record degrades to "not logged in" instead of surfacing an
    /// error, so navigation flows never crash on bad storage.
    pub fn current_session(&self) -> Option<Session> {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read login state, treating as logged out: {}", e);
                return None;
            }
        };

        let state: LoginState = match serde_json::from_str(&stored) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Malformed login state, treating as logged out: {}", e);
                return None;
            }
        };

        if state.is_expired(now_ms()) {
            tracing::info!("Login state expired for {}, clearing", state.student_id);
            self.logout();
            return None;
        }

        Some(Session::from(&state))
    }

    /// Whether a valid session exists right now.
    pub fn is_logged_in(&self) -> bool {
        self.current_session().is_some()
    }

    /// Delete the login record. Idempotent; storage failures are only
    /// logged since there is nothing useful a caller can do with them.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            tracing::warn!("Failed to clear login state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn manager() -> (Arc<MemoryStore>, SessionManager) {
        let store = Arc::new(MemoryStore::new());
        let manager = SessionManager::new(store.clone());
        (store, manager)
    }

    #[test]
    fn test_login_persists_matching_session() {
        let (_, manager) = manager();
        let session = manager.login("admin", "admin").unwrap();
        assert_eq!(session.vm_number, "1");
        assert_eq!(session.edge_server_url, "http://39.104.80.221:25006/#/login");
        assert_eq!(session.dify_url, "https://vd01.zime.edu.cn/dify/");

        let current = manager.current_session().expect("session should be live");
        assert_eq!(current, session);
    }

    #[test]
    fn test_invalid_login_has_no_side_effect() {
        let (_, manager) = manager();
        manager.login("admin", "admin").unwrap();

        let err = manager.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, PortalError::InvalidCredentials));
        // The earlier session is unaffected.
        assert_eq!(manager.current_session().unwrap().student_id, "admin");
    }

    #[test]
    fn test_relogin_overwrites_previous_record() {
        let (_, manager) = manager();
        manager.login("admin", "admin").unwrap();
        manager.login("adminkm", "admin").unwrap();

        let current = manager.current_session().unwrap();
        assert_eq!(current.student_id, "adminkm");
        assert_eq!(current.vm_number, "2");
    }

    #[test]
    fn test_round_trip_login_logout() {
        let (_, manager) = manager();
        let session = manager.login("admin", "admin").unwrap();
        assert_eq!(manager.current_session(), Some(session));
        manager.logout();
        assert_eq!(manager.current_session(), None);
        // Logout is idempotent.
        manager.logout();
        assert_eq!(manager.current_session(), None);
    }

    #[test]
    fn test_expired_record_is_cleared_on_read() {
        let (store, manager) = manager();
        let state = LoginState {
            student_id: "admin".to_string(),
            vm_number: "1".to_string(),
            edge_server_url: "e".to_string(),
            dify_url: "d".to_string(),
            expire_time: now_ms() - 1,
        };
        store
            .set(STORAGE_KEY, &serde_json::to_string(&state).unwrap())
            .unwrap();

        assert_eq!(manager.current_session(), None);
        // Lazy expiry deletes the record too.
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_record_reads_as_logged_out() {
        let (store, manager) = manager();
        store.set(STORAGE_KEY, "not json {{{").unwrap();
        assert_eq!(manager.current_session(), None);
        assert!(!manager.is_logged_in());
    }

    struct FailingStore;

    impl SessionStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_degrades_to_logged_out() {
        let manager = SessionManager::new(Arc::new(FailingStore));
        // Reads degrade to "no session" instead of erroring.
        assert_eq!(manager.current_session(), None);
        // A failed persist surfaces as a storage error.
        assert!(matches!(
            manager.login("admin", "admin"),
            Err(PortalError::Storage(_))
        ));
        // Logout swallows the failure.
        manager.logout();
    }
}
