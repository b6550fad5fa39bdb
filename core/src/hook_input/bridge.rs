//! Environment-variable payloads from the alternate host bridge.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::HookError;

pub const TOOL_NAME_VAR: &str = "ASP_TOOL_NAME";
pub const TOOL_ARGS_VAR: &str = "ASP_TOOL_ARGS";
pub const TOOL_RESULT_VAR: &str = "ASP_TOOL_RESULT";

/// Value of the `source` key on bridge-originated records.
pub const BRIDGE_SOURCE: &str = "pi";

pub trait BridgeEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
pub struct ProcessEnv;

impl BridgeEnv for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl BridgeEnv for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Builds `{tool_name, tool_args, tool_result, source}` from the bridge vars.
///
/// Malformed JSON in either JSON var is an error, same as malformed stdin.
pub fn record_from_env(env: &dyn BridgeEnv) -> Result<Map<String, Value>, HookError> {
    let tool_name = env.var(TOOL_NAME_VAR).map(Value::String).unwrap_or(Value::Null);
    let tool_args = json_var(env, TOOL_ARGS_VAR)?;
    let tool_result = json_var(env, TOOL_RESULT_VAR)?;

    let mut map = Map::new();
    map.insert("tool_name".to_string(), tool_name);
    map.insert("tool_args".to_string(), tool_args);
    map.insert("tool_result".to_string(), tool_result);
    map.insert("source".to_string(), Value::String(BRIDGE_SOURCE.to_string()));
    Ok(map)
}

fn json_var(env: &dyn BridgeEnv, key: &'static str) -> Result<Value, HookError> {
    let raw = env.var(key).unwrap_or_else(|| "{}".to_string());
    serde_json::from_str(&raw).map_err(|source| HookError::InvalidBridgeVar { key, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_vars_use_defaults() {
        let map = record_from_env(&env(&[])).unwrap();
        assert_eq!(
            Value::Object(map),
            json!({"tool_name": null, "tool_args": {}, "tool_result": {}, "source": "pi"})
        );
    }

    #[test]
    fn vars_are_decoded_in_order() {
        let map = record_from_env(&env(&[
            (TOOL_NAME_VAR, "Bash"),
            (TOOL_ARGS_VAR, r#"{"command":"ls"}"#),
            (TOOL_RESULT_VAR, r#"{"exitCode":2}"#),
        ]))
        .unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["tool_name", "tool_args", "tool_result", "source"]);
        assert_eq!(map["tool_args"], json!({"command": "ls"}));
        assert_eq!(map["tool_result"], json!({"exitCode": 2}));
    }

    #[test]
    fn malformed_result_var_is_an_error() {
        let err = record_from_env(&env(&[
            (TOOL_NAME_VAR, "Bash"),
            (TOOL_RESULT_VAR, "{oops"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            HookError::InvalidBridgeVar { key: TOOL_RESULT_VAR, .. }
        ));
    }
}
