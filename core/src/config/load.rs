use std::path::{Path, PathBuf};

use super::types::HookConfig;
use crate::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "BASH_HOOKS_CONFIG";
pub const TARGET_TOOL_ENV: &str = "BASH_HOOKS_TARGET_TOOL";
pub const ALL_LOG_ENV: &str = "BASH_HOOKS_ALL_LOG";
pub const FAILURE_LOG_ENV: &str = "BASH_HOOKS_FAILURE_LOG";

/// Loads the config file (explicit path, else `BASH_HOOKS_CONFIG`, else
/// built-in defaults), applies env overrides and expands `~` in log paths.
pub fn load_with(config_path: Option<&Path>) -> Result<HookConfig, ConfigError> {
    let from_env = env_value(CONFIG_PATH_ENV)?;
    let path = match (config_path, from_env) {
        (Some(p), _) => Some(p.to_path_buf()),
        (None, Some(v)) => Some(PathBuf::from(expand_path(&v)?)),
        (None, None) => None,
    };

    let mut cfg = match path {
        Some(p) => read_config_file(&p)?,
        None => HookConfig::default(),
    };

    if let Some(v) = env_value(TARGET_TOOL_ENV)? {
        cfg.target_tool = v;
    }
    if let Some(v) = env_value(ALL_LOG_ENV)? {
        cfg.all_log_path = v;
    }
    if let Some(v) = env_value(FAILURE_LOG_ENV)? {
        cfg.failure_log_path = v;
    }

    cfg.all_log_path = expand_path(&cfg.all_log_path)?;
    cfg.failure_log_path = expand_path(&cfg.failure_log_path)?;

    tracing::debug!(
        target: "bash_hooks.config",
        target_tool = %cfg.target_tool,
        all_log = %cfg.all_log_path,
        failure_log = %cfg.failure_log_path,
        "hook config loaded"
    );

    Ok(cfg)
}

fn read_config_file(path: &Path) -> Result<HookConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<HookConfig>(&s).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Blank values count as unset; non-UTF-8 values are rejected.
fn env_value(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvInvalid {
            key: key.to_string(),
            source: e.into(),
        }),
    }
}

/// Expands a leading `~`. Fails only when `~` is used and the home
/// directory is unknown or not UTF-8.
pub fn expand_path(raw: &str) -> Result<String, ConfigError> {
    if !raw.starts_with('~') {
        return Ok(raw.to_string());
    }
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    let home = home_dir.to_str().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(shellexpand::tilde_with_context(raw, || Some(home)).into_owned())
}
