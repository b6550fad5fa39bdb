//! Failure signals for the failure logger.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::hook_input::{is_truthy, InvocationRecord};

lazy_static! {
    static ref EXIT_CODE_PREFIX: Regex = Regex::new(r"^Exit code (\d+)").expect("valid regex");
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FailureSignals {
    /// Raw JSON value as reported by the host (an integer in practice).
    pub exit_code: Option<Value>,
    /// Raw JSON value of the first non-empty error field.
    pub error_message: Option<Value>,
}

impl FailureSignals {
    pub fn extract(record: &InvocationRecord) -> Self {
        let error_message = [
            record.get("error"),
            record.result_field("error"),
            record.result_field("stderr"),
        ]
        .into_iter()
        .flatten()
        .find(|v| is_truthy(v))
        .cloned();

        let exit_code = ["exit_code", "exitCode"]
            .into_iter()
            .filter_map(|k| record.result_field(k))
            .find(|v| is_truthy(v))
            .cloned()
            .or_else(|| {
                error_message
                    .as_ref()
                    .and_then(Value::as_str)
                    .and_then(exit_code_from_message)
                    .map(Value::from)
            });

        Self {
            exit_code,
            error_message,
        }
    }

    /// Neither a non-zero exit code nor an error message means "not a failure".
    pub fn is_failure(&self) -> bool {
        let has_code = self.exit_code.as_ref().is_some_and(|c| !is_zero(c));
        has_code || self.error_message.is_some()
    }
}

/// Parses `Exit code N` at the very start of a message.
pub fn exit_code_from_message(message: &str) -> Option<i64> {
    EXIT_CODE_PREFIX
        .captures(message)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn is_zero(v: &Value) -> bool {
    v.as_f64() == Some(0.0)
}
