use serde_json::{Map, Value};

const TOOL_INPUT_KEYS: [&str; 2] = ["tool_input", "tool_args"];
const TOOL_RESULT_KEYS: [&str; 2] = ["tool_output", "tool_result"];

/// One tool invocation as delivered by the host, kept as raw JSON.
///
/// Hosts disagree on key names, so fields are found by ordered fallback
/// lookups rather than a fixed schema.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRecord {
    payload: Value,
}

impl InvocationRecord {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Top-level key lookup; `None` for non-object payloads.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.as_object().and_then(|m| m.get(key))
    }

    pub fn tool_name(&self) -> Option<&str> {
        self.get("tool_name").and_then(Value::as_str)
    }

    pub fn is_bridge(&self) -> bool {
        self.get("source").and_then(Value::as_str) == Some(super::bridge::BRIDGE_SOURCE)
    }

    /// First non-empty value among `keys`.
    pub fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().filter_map(|k| self.get(k)).find(|v| is_truthy(v))
    }

    /// `tool_input`, else `tool_args`.
    pub fn tool_input(&self) -> Option<&Value> {
        self.first_present(&TOOL_INPUT_KEYS)
    }

    /// `tool_output`, else `tool_result`.
    pub fn tool_result(&self) -> Option<&Value> {
        self.first_present(&TOOL_RESULT_KEYS)
    }

    /// Looks up `key` inside the tool input when it is an object.
    pub fn input_field(&self, key: &str) -> Option<&Value> {
        object_field(self.tool_input(), key)
    }

    /// Looks up `key` inside the tool result when it is an object.
    pub fn result_field(&self, key: &str) -> Option<&Value> {
        object_field(self.tool_result(), key)
    }

    pub fn command(&self) -> Option<String> {
        self.input_field("command")
            .filter(|v| is_truthy(v))
            .map(display_value)
    }
}

impl From<Map<String, Value>> for InvocationRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(Value::Object(map))
    }
}

fn object_field<'a>(section: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    section.and_then(Value::as_object).and_then(|m| m.get(key))
}

/// Host-script truthiness: null, false, zero, and empty strings,
/// arrays and objects are all "empty".
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings as-is, anything else as compact JSON.
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_input_falls_back_to_tool_args() {
        let rec = InvocationRecord::new(json!({
            "tool_name": "Bash",
            "tool_args": {"command": "ls -la"}
        }));
        assert_eq!(rec.command().as_deref(), Some("ls -la"));
    }

    #[test]
    fn empty_tool_input_is_skipped_in_favour_of_tool_args() {
        let rec = InvocationRecord::new(json!({
            "tool_input": {},
            "tool_args": {"command": "pwd"}
        }));
        assert_eq!(rec.command().as_deref(), Some("pwd"));
    }

    #[test]
    fn tool_output_wins_over_tool_result() {
        let rec = InvocationRecord::new(json!({
            "tool_output": {"stderr": "a"},
            "tool_result": {"stderr": "b"}
        }));
        assert_eq!(rec.result_field("stderr"), Some(&json!("a")));
    }

    #[test]
    fn non_object_sections_have_no_fields() {
        let rec = InvocationRecord::new(json!({
            "tool_input": "echo hi",
            "tool_output": "done"
        }));
        assert_eq!(rec.command(), None);
        assert_eq!(rec.result_field("exit_code"), None);
    }

    #[test]
    fn non_object_payload_has_no_tool_name() {
        let rec = InvocationRecord::new(json!(["Bash"]));
        assert_eq!(rec.tool_name(), None);
        assert_eq!(rec.get("tool_name"), None);
    }

    #[test]
    fn bridge_records_are_tagged() {
        let rec = InvocationRecord::new(json!({"tool_name": "Bash", "source": "pi"}));
        assert!(rec.is_bridge());
        assert!(!InvocationRecord::new(json!({"tool_name": "Bash"})).is_bridge());
    }

    #[test]
    fn truthiness_matches_host_scripts() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&v), "{v} should be empty");
        }
        for v in [json!(true), json!(1), json!(-3), json!("x"), json!([0]), json!({"a": 1})] {
            assert!(is_truthy(&v), "{v} should be present");
        }
    }

    #[test]
    fn non_string_command_is_rendered_as_json() {
        let rec = InvocationRecord::new(json!({"tool_input": {"command": ["ls", "-l"]}}));
        assert_eq!(rec.command().as_deref(), Some(r#"["ls","-l"]"#));
    }
}
