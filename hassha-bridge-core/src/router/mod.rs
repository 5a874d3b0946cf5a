//! The event router: maps host events to canonical hook names and fires the
//! external notifier, best effort.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

mod payload;
mod routes;

pub use payload::HookPayload;

use crate::events::{HostEvent, ToolExecuteAfterPayload, ToolExecuteBeforePayload};
use crate::notifier::Notify;

/// Canonical hook names from the reference notification taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    SessionStart,
    SessionEnd,
    Stop,
    Notification,
    PreCompact,
    PreToolUse,
    PostToolUse,
    PostToolUseFailure,
}

impl HookName {
    pub fn as_str(self) -> &'static str {
        match self {
            HookName::SessionStart => "SessionStart",
            HookName::SessionEnd => "SessionEnd",
            HookName::Stop => "Stop",
            HookName::Notification => "Notification",
            HookName::PreCompact => "PreCompact",
            HookName::PreToolUse => "PreToolUse",
            HookName::PostToolUse => "PostToolUse",
            HookName::PostToolUseFailure => "PostToolUseFailure",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless dispatcher from host events to notifier invocations.
///
/// Holds the notify sink and the project directory the host handed us at
/// startup; each dispatch builds a fresh payload and fires at most one
/// invocation. Notifier failures are logged and swallowed, never returned.
pub struct Router<N: Notify> {
    notifier: N,
    dir: PathBuf,
}

impl<N: Notify> Router<N> {
    pub fn new(notifier: N, dir: impl Into<PathBuf>) -> Self {
        Self {
            notifier,
            dir: dir.into(),
        }
    }

    /// The working directory reported in every payload
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// General event-subscription handler: route one host event.
    ///
    /// Kinds without a route (`permission.replied`) are a silent no-op.
    pub async fn dispatch(&self, event: &HostEvent) {
        let Some(route) = routes::route_for(event.kind()) else {
            debug!(kind = event.kind().as_tag(), "no route for host event");
            return;
        };

        let hook = (route.hook)(event);
        let mut payload = HookPayload::new(hook, &self.dir);
        if let Some(session_id) = event.session_id() {
            payload.insert("session_id", session_id);
        }
        (route.fields)(event, &mut payload);

        self.run_hook(hook, &payload).await;
    }

    /// The host's dedicated `tool.execute.before` hook
    pub async fn tool_execute_before(&self, tool: &str, session_id: Option<&str>) {
        self.dispatch(&HostEvent::ToolExecuteBefore(ToolExecuteBeforePayload {
            session_id: session_id.map(str::to_string),
            tool: tool.to_string(),
            args: Value::Null,
        }))
        .await;
    }

    /// The host's dedicated `tool.execute.after` hook
    pub async fn tool_execute_after(
        &self,
        tool: &str,
        output: Option<&Value>,
        session_id: Option<&str>,
    ) {
        self.dispatch(&HostEvent::ToolExecuteAfter(ToolExecuteAfterPayload {
            session_id: session_id.map(str::to_string),
            tool: tool.to_string(),
            args: Value::Null,
            output: output.cloned(),
        }))
        .await;
    }

    /// Fire one notifier invocation. Failures are logged, never propagated;
    /// the host must not see them and later events must keep flowing.
    async fn run_hook(&self, hook: HookName, payload: &HookPayload) {
        debug!(hook = hook.as_str(), "invoking notifier");
        if let Err(err) = self.notifier.invoke(hook, payload).await {
            error!(hook = hook.as_str(), error = %err, "notifier invocation failed");
        }
    }
}
