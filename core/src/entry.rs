use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::FailureSignals;
use crate::hook_input::InvocationRecord;

/// Local wall-clock time, ISO-8601 without offset. Microseconds are
/// omitted when they are zero.
pub fn format_timestamp(now: NaiveDateTime) -> String {
    if now.nanosecond() / 1_000 == 0 {
        now.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Entry of the all-calls log: the whole payload under a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllCallsEntry {
    pub timestamp: String,
    pub raw_hook_payload: Value,
}

impl AllCallsEntry {
    pub fn new(timestamp: String, record: InvocationRecord) -> Self {
        Self {
            timestamp,
            raw_hook_payload: record.into_payload(),
        }
    }
}

/// Flattened entry of the failure log. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureEntry {
    pub timestamp: String,
    pub exit_code: Option<Value>,
    pub command: Option<Value>,
    pub description: Option<Value>,
    pub error_message: Option<Value>,
    pub is_interrupt: Value,
    pub session_id: Option<Value>,
    pub cwd: Option<Value>,
    pub tool_use_id: Option<Value>,
}

impl FailureEntry {
    pub fn build(timestamp: String, record: &InvocationRecord, signals: &FailureSignals) -> Self {
        let field = |key: &str| record.get(key).cloned();
        Self {
            timestamp,
            exit_code: signals.exit_code.clone(),
            command: record.input_field("command").cloned(),
            description: record.input_field("description").cloned(),
            error_message: signals.error_message.clone(),
            is_interrupt: field("is_interrupt").unwrap_or(Value::Bool(false)),
            session_id: field("session_id"),
            cwd: field("cwd"),
            tool_use_id: field("tool_use_id"),
        }
    }
}

/// Either kind of log entry, serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogEntry {
    AllCalls(AllCallsEntry),
    Failure(FailureEntry),
}
