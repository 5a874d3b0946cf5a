use serde::{Deserialize, Serialize};
use serde_json::Value;

mod session;
mod tool;

pub use session::{PermissionReplyProperties, SessionProperties};
pub use tool::{ToolExecuteAfterPayload, ToolExecuteBeforePayload};

/// The host event kinds the bridge recognizes, keyed by the host's dotted
/// `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SessionCreated,
    SessionDeleted,
    SessionIdle,
    SessionError,
    SessionCompacted,
    PermissionReplied,
    ToolExecuteBefore,
    ToolExecuteAfter,
}

impl EventKind {
    /// Every kind the bridge recognizes, in the host's documented order
    pub const ALL: &'static [EventKind] = &[
        EventKind::SessionCreated,
        EventKind::SessionDeleted,
        EventKind::SessionIdle,
        EventKind::SessionError,
        EventKind::SessionCompacted,
        EventKind::PermissionReplied,
        EventKind::ToolExecuteBefore,
        EventKind::ToolExecuteAfter,
    ];

    /// The host's `type` tag for this kind
    pub fn as_tag(self) -> &'static str {
        match self {
            EventKind::SessionCreated => "session.created",
            EventKind::SessionDeleted => "session.deleted",
            EventKind::SessionIdle => "session.idle",
            EventKind::SessionError => "session.error",
            EventKind::SessionCompacted => "session.compacted",
            EventKind::PermissionReplied => "permission.replied",
            EventKind::ToolExecuteBefore => "tool.execute.before",
            EventKind::ToolExecuteAfter => "tool.execute.after",
        }
    }

    /// Look up a kind by the host's `type` tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_tag() == tag)
    }
}

/// All host events the bridge subscribes to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum HostEvent {
    /// New session started
    #[serde(rename = "session.created")]
    SessionCreated(SessionProperties),

    /// Session terminated
    #[serde(rename = "session.deleted")]
    SessionDeleted(SessionProperties),

    /// Session finished responding
    #[serde(rename = "session.idle")]
    SessionIdle(SessionProperties),

    /// An error occurred in the session
    #[serde(rename = "session.error")]
    SessionError(SessionProperties),

    /// Session history was compacted
    #[serde(rename = "session.compacted")]
    SessionCompacted(SessionProperties),

    /// User responded to a permission prompt
    #[serde(rename = "permission.replied")]
    PermissionReplied(PermissionReplyProperties),

    /// Before tool execution
    #[serde(rename = "tool.execute.before")]
    ToolExecuteBefore(ToolExecuteBeforePayload),

    /// After tool execution
    #[serde(rename = "tool.execute.after")]
    ToolExecuteAfter(ToolExecuteAfterPayload),
}

impl HostEvent {
    /// Parse one host event document.
    ///
    /// Malformed JSON is an error. Well-formed JSON whose `type` tag is not a
    /// recognized kind yields `Ok(None)`; hosts grow new event kinds and the
    /// bridge must stay quiet for them.
    pub fn parse(input: &str) -> Result<Option<Self>, serde_json::Error> {
        let value: Value = serde_json::from_str(input)?;
        let Some(tag) = value.get("type").and_then(Value::as_str) else {
            return Ok(None);
        };
        if EventKind::from_tag(tag).is_none() {
            return Ok(None);
        }
        serde_json::from_value(value).map(Some)
    }

    /// The kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::SessionCreated(_) => EventKind::SessionCreated,
            HostEvent::SessionDeleted(_) => EventKind::SessionDeleted,
            HostEvent::SessionIdle(_) => EventKind::SessionIdle,
            HostEvent::SessionError(_) => EventKind::SessionError,
            HostEvent::SessionCompacted(_) => EventKind::SessionCompacted,
            HostEvent::PermissionReplied(_) => EventKind::PermissionReplied,
            HostEvent::ToolExecuteBefore(_) => EventKind::ToolExecuteBefore,
            HostEvent::ToolExecuteAfter(_) => EventKind::ToolExecuteAfter,
        }
    }

    /// Session id supplied by the host, if any
    pub fn session_id(&self) -> Option<&str> {
        match self {
            HostEvent::SessionCreated(p)
            | HostEvent::SessionDeleted(p)
            | HostEvent::SessionIdle(p)
            | HostEvent::SessionError(p)
            | HostEvent::SessionCompacted(p) => p.session_id.as_deref(),
            HostEvent::PermissionReplied(p) => p.session_id.as_deref(),
            HostEvent::ToolExecuteBefore(p) => p.session_id.as_deref(),
            HostEvent::ToolExecuteAfter(p) => p.session_id.as_deref(),
        }
    }

    /// Tool name, for the tool execution events
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            HostEvent::ToolExecuteBefore(p) => Some(&p.tool),
            HostEvent::ToolExecuteAfter(p) => Some(&p.tool),
            _ => None,
        }
    }
}
