use serde::{Deserialize, Serialize};

use crate::engine::HookKind;

pub const DEFAULT_TARGET_TOOL: &str = "Bash";
pub const DEFAULT_ALL_LOG_PATH: &str = "~/.claude/bash-all.log";
pub const DEFAULT_FAILURE_LOG_PATH: &str = "~/.claude/bash-failures.log";

/// Process-wide hook settings, computed once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    #[serde(default = "default_target_tool")]
    pub target_tool: String,

    #[serde(default = "default_all_log_path")]
    pub all_log_path: String,

    #[serde(default = "default_failure_log_path")]
    pub failure_log_path: String,
}

fn default_target_tool() -> String {
    DEFAULT_TARGET_TOOL.to_string()
}

fn default_all_log_path() -> String {
    DEFAULT_ALL_LOG_PATH.to_string()
}

fn default_failure_log_path() -> String {
    DEFAULT_FAILURE_LOG_PATH.to_string()
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            target_tool: default_target_tool(),
            all_log_path: default_all_log_path(),
            failure_log_path: default_failure_log_path(),
        }
    }
}

impl HookConfig {
    pub fn log_path(&self, kind: HookKind) -> &str {
        match kind {
            HookKind::AllCalls => &self.all_log_path,
            HookKind::Failures => &self.failure_log_path,
        }
    }

    pub fn set_log_path(&mut self, kind: HookKind, path: String) {
        match kind {
            HookKind::AllCalls => self.all_log_path = path,
            HookKind::Failures => self.failure_log_path = path,
        }
    }
}
