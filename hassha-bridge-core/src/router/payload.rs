use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use super::HookName;

/// One notification payload, sent to the notifier as a single line of JSON.
///
/// Built fresh per event and never mutated after dispatch. Always carries
/// `hook_event_name` and `cwd`; routes extend it with event-specific fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct HookPayload {
    fields: Map<String, Value>,
}

impl HookPayload {
    pub fn new(hook: HookName, cwd: &Path) -> Self {
        let mut fields = Map::new();
        fields.insert("hook_event_name".to_string(), hook.as_str().into());
        fields.insert("cwd".to_string(), cwd.to_string_lossy().into());
        Self { fields }
    }

    /// Add an event-specific field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Encode the payload as one line of JSON
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }
}
