//! The routing table: host event kind → canonical hook name + extra fields.
//!
//! `permission.replied` has no entry on purpose. The host has no equivalent
//! of a permission-request sound, and the reply itself stays silent.

use crate::events::{EventKind, HostEvent};

use super::{HookName, HookPayload};

/// One row of the routing table
pub(super) struct Route {
    pub kind: EventKind,
    /// Select the canonical hook name; for most kinds this is fixed, for
    /// `tool.execute.after` it depends on the tool result
    pub hook: fn(&HostEvent) -> HookName,
    /// Extend the payload with the route's event-specific fields
    pub fields: fn(&HostEvent, &mut HookPayload),
}

pub(super) static ROUTES: &[Route] = &[
    Route {
        kind: EventKind::SessionCreated,
        hook: hook_session_start,
        fields: fields_session_start,
    },
    Route {
        kind: EventKind::SessionDeleted,
        hook: hook_session_end,
        fields: fields_session_end,
    },
    Route {
        kind: EventKind::SessionIdle,
        hook: hook_stop,
        fields: fields_none,
    },
    Route {
        kind: EventKind::SessionError,
        hook: hook_notification,
        fields: fields_notification,
    },
    Route {
        kind: EventKind::SessionCompacted,
        hook: hook_pre_compact,
        fields: fields_pre_compact,
    },
    Route {
        kind: EventKind::ToolExecuteBefore,
        hook: hook_pre_tool_use,
        fields: fields_tool,
    },
    Route {
        kind: EventKind::ToolExecuteAfter,
        hook: hook_post_tool_use,
        fields: fields_tool,
    },
];

/// Look up the route for an event kind, if it has one
pub(super) fn route_for(kind: EventKind) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.kind == kind)
}

fn hook_session_start(_: &HostEvent) -> HookName {
    HookName::SessionStart
}

fn hook_session_end(_: &HostEvent) -> HookName {
    HookName::SessionEnd
}

fn hook_stop(_: &HostEvent) -> HookName {
    HookName::Stop
}

fn hook_notification(_: &HostEvent) -> HookName {
    HookName::Notification
}

fn hook_pre_compact(_: &HostEvent) -> HookName {
    HookName::PreCompact
}

fn hook_pre_tool_use(_: &HostEvent) -> HookName {
    HookName::PreToolUse
}

fn hook_post_tool_use(event: &HostEvent) -> HookName {
    match event {
        HostEvent::ToolExecuteAfter(payload) if payload.is_failure() => {
            HookName::PostToolUseFailure
        }
        _ => HookName::PostToolUse,
    }
}

fn fields_none(_: &HostEvent, _: &mut HookPayload) {}

fn fields_session_start(_: &HostEvent, payload: &mut HookPayload) {
    payload.insert("source", "startup");
}

fn fields_session_end(_: &HostEvent, payload: &mut HookPayload) {
    payload.insert("reason", "other");
}

fn fields_notification(_: &HostEvent, payload: &mut HookPayload) {
    payload.insert("notification_type", "error");
}

fn fields_pre_compact(_: &HostEvent, payload: &mut HookPayload) {
    payload.insert("trigger", "auto");
}

fn fields_tool(event: &HostEvent, payload: &mut HookPayload) {
    if let Some(tool) = event.tool_name() {
        payload.insert("tool_name", tool);
    }
}
