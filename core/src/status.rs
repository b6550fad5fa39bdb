use serde_json::Value;

use crate::hook_input::display_value;

pub const COMMAND_PREVIEW_CHARS: usize = 40;

/// Command text cut to [`COMMAND_PREVIEW_CHARS`] characters, or `N/A`.
pub fn command_preview(command: Option<&str>) -> String {
    match command {
        Some(c) if !c.is_empty() => c.chars().take(COMMAND_PREVIEW_CHARS).collect(),
        _ => "N/A".to_string(),
    }
}

pub fn all_calls_line(command: Option<&str>) -> String {
    format!("[LOGGED ALL] {}...", command_preview(command))
}

pub fn failure_line(exit_code: Option<&Value>, command: Option<&str>) -> String {
    let code = exit_code.map(display_value).unwrap_or_else(|| "None".to_string());
    format!("[LOGGED FAILURE] exit={code} cmd={}...", command_preview(command))
}
