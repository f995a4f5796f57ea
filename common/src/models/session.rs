// common/src/models/session.rs
use serde::{Deserialize, Serialize};

/// How long a login stays valid.
pub const LOGIN_EXPIRE_DAYS: i64 = 30;
pub const LOGIN_EXPIRE_MS: i64 = LOGIN_EXPIRE_DAYS * 24 * 60 * 60 * 1000;

/// Storage key for the persisted login record.
pub const STORAGE_KEY: &str = "workshop_login_state";

/// The persisted login record. Field names are part of the stored
/// JSON layout and must stay exactly as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginState {
    pub student_id: String,
    pub vm_number: String,
    pub edge_server_url: String,
    pub dify_url: String,
    /// Absolute expiry instant, epoch milliseconds.
    pub expire_time: i64,
}

impl LoginState {
    /// A record is expired the instant `now` reaches `expire_time`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expire_time <= now_ms
    }
}

/// The public view of an active session. Everything the presentation
/// layer may see; the expiry timestamp is deliberately omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub student_id: String,
    pub vm_number: String,
    pub edge_server_url: String,
    pub dify_url: String,
}

impl From<&LoginState> for Session {
    fn from(state: &LoginState) -> Self {
        Self {
            student_id: state.student_id.clone(),
            vm_number: state.vm_number.clone(),
            edge_server_url: state.edge_server_url.clone(),
            dify_url: state.dify_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(expire_time: i64) -> LoginState {
        LoginState {
            student_id: "admin".to_string(),
            vm_number: "1".to_string(),
            edge_server_url: "http://39.104.80.221:25006/#/login".to_string(),
            dify_url: "https://vd01.zime.edu.cn/dify/".to_string(),
            expire_time,
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let t0 = 1_700_000_000_000;
        let state = sample(t0 + LOGIN_EXPIRE_MS);
        // Valid one millisecond before the deadline, expired exactly on it.
        assert!(!state.is_expired(t0 + LOGIN_EXPIRE_MS - 1));
        assert!(state.is_expired(t0 + LOGIN_EXPIRE_MS));
        assert!(state.is_expired(t0 + LOGIN_EXPIRE_MS + 1));
    }

    #[test]
    fn test_stored_json_layout() {
        let state = sample(42);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["studentId"], "admin");
        assert_eq!(json["vmNumber"], "1");
        assert_eq!(json["edgeServerUrl"], "http://39.104.80.221:25006/#/login");
        assert_eq!(json["difyUrl"], "https://vd01.zime.edu.cn/dify/");
        assert_eq!(json["expireTime"], 42);
    }

    #[test]
    fn test_session_view_omits_expiry() {
        let session = Session::from(&sample(42));
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("expireTime").is_none());
        assert_eq!(json["studentId"], "admin");
    }
}
