use serde::{Deserialize, Serialize};

/// Properties shared by the host's session lifecycle events.
///
/// Every field is optional; a bare `{"type": "session.created"}` is a valid
/// event document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionProperties {
    /// Identifier of the session the event belongs to, when the host sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl SessionProperties {
    /// Properties carrying only a session id
    pub fn with_session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
        }
    }
}

/// Properties of a `permission.replied` event
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionReplyProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// The user's reply, e.g. "once", "always" or "reject"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}
