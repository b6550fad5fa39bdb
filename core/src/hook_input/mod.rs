//! Normalizes the two invocation shapes (stdin JSON, bridge env vars) into
//! one [`InvocationRecord`].

pub mod bridge;
pub mod record;
pub mod stdin;

pub use bridge::{record_from_env, BridgeEnv, ProcessEnv};
pub use record::{display_value, is_truthy, InvocationRecord};
pub use stdin::{decode_stdin_bytes, read_stdin_text};

use crate::error::HookError;

/// Parses non-blank stdin as JSON, otherwise falls back to the bridge env.
pub fn load_hook_input(raw: &str, env: &dyn BridgeEnv) -> Result<InvocationRecord, HookError> {
    if !raw.trim().is_empty() {
        let payload = serde_json::from_str(raw).map_err(HookError::InvalidInput)?;
        tracing::debug!(target: "bash_hooks.input", bytes = raw.len(), "hook payload read from stdin");
        return Ok(InvocationRecord::new(payload));
    }

    let map = record_from_env(env)?;
    tracing::debug!(target: "bash_hooks.input", "hook payload built from bridge env");
    Ok(InvocationRecord::from(map))
}
