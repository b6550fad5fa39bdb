//! One hook run: adapt input, filter, build entry, append, report.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::config::{HookConfig, DEFAULT_TARGET_TOOL};
use crate::entry::{format_timestamp, AllCallsEntry, FailureEntry, LogEntry};
use crate::error::HookError;
use crate::extract::FailureSignals;
use crate::filter::ToolFilter;
use crate::hook_input::{load_hook_input, BridgeEnv};
use crate::log_writer::append_entry;
use crate::status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Logs every call of the target tool.
    AllCalls,
    /// Logs only calls that carry a failure signal.
    Failures,
}

impl HookKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::AllCalls => "all",
            HookKind::Failures => "failures",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotTargetTool,
    NoFailureSignal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Skipped(SkipReason),
    Logged { path: PathBuf, status_line: String },
}

pub fn run_hook(
    kind: HookKind,
    cfg: &HookConfig,
    raw_stdin: &str,
    env: &dyn BridgeEnv,
    now: NaiveDateTime,
) -> Result<HookOutcome, HookError> {
    let record = load_hook_input(raw_stdin, env)?;

    if !ToolFilter::new(&cfg.target_tool).matches(&record) {
        tracing::debug!(
            target: "bash_hooks.engine",
            hook = kind.as_str(),
            tool = record.tool_name().unwrap_or("<none>"),
            "skipping invocation of other tool"
        );
        return Ok(HookOutcome::Skipped(SkipReason::NotTargetTool));
    }

    tracing::debug!(
        target: "bash_hooks.engine",
        hook = kind.as_str(),
        bridge = record.is_bridge(),
        "handling target tool invocation"
    );

    let command = record.command();
    let timestamp = format_timestamp(now);

    let (entry, status_line) = match kind {
        HookKind::AllCalls => (
            LogEntry::AllCalls(AllCallsEntry::new(timestamp, record)),
            status::all_calls_line(command.as_deref()),
        ),
        HookKind::Failures => {
            let signals = FailureSignals::extract(&record);
            if !signals.is_failure() {
                tracing::debug!(
                    target: "bash_hooks.engine",
                    hook = kind.as_str(),
                    "no failure signal, nothing to log"
                );
                return Ok(HookOutcome::Skipped(SkipReason::NoFailureSignal));
            }
            let line = status::failure_line(signals.exit_code.as_ref(), command.as_deref());
            (
                LogEntry::Failure(FailureEntry::build(timestamp, &record, &signals)),
                line,
            )
        }
    };

    let path = PathBuf::from(cfg.log_path(kind));
    append_entry(&path, &entry)?;

    Ok(HookOutcome::Logged { path, status_line })
}

/// Runs a hook whose configuration may have failed to load.
///
/// A config error only fails the run when the invocation would have been
/// logged; calls of other tools (checked against the default target) still
/// exit quietly.
pub fn run_hook_with_loaded(
    kind: HookKind,
    loaded: Result<HookConfig, HookError>,
    raw_stdin: &str,
    env: &dyn BridgeEnv,
    now: NaiveDateTime,
) -> Result<HookOutcome, HookError> {
    let err = match loaded {
        Ok(cfg) => return run_hook(kind, &cfg, raw_stdin, env, now),
        Err(err) => err,
    };

    let record = load_hook_input(raw_stdin, env)?;
    if !ToolFilter::new(DEFAULT_TARGET_TOOL).matches(&record) {
        tracing::warn!(
            target: "bash_hooks.engine",
            hook = kind.as_str(),
            error = %err,
            "config unusable, skipping invocation of other tool"
        );
        return Ok(HookOutcome::Skipped(SkipReason::NotTargetTool));
    }
    Err(err)
}
