use bash_hooks_core::config::{expand_path, load_with};
use bash_hooks_core::hook_input::{read_stdin_text, ProcessEnv};
use bash_hooks_core::{run_hook_with_loaded, HookConfig, HookError, HookKind, HookOutcome};
use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::HookArgs;

/// Entry point of a hook binary; returns the process exit status.
pub fn run_main(kind: HookKind) -> i32 {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match HookArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return usage_exit(err),
    };

    match execute(kind, &args) {
        Ok(outcome) => {
            if let HookOutcome::Logged { status_line, .. } = outcome {
                println!("{status_line}");
            }
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

/// `--help`/`--version` exit 0; any other argument error exits 1.
fn usage_exit(err: clap::Error) -> i32 {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

pub fn execute(kind: HookKind, args: &HookArgs) -> Result<HookOutcome, HookError> {
    let raw = read_stdin_text().map_err(HookError::ReadInput)?;
    let loaded = load_config(kind, args);
    let outcome = run_hook_with_loaded(kind, loaded, &raw, &ProcessEnv, Local::now().naive_local())?;

    tracing::debug!(
        target: "bash_hooks.cli",
        hook = kind.as_str(),
        outcome = ?outcome,
        ignored_args = args.host_args.len(),
        "hook finished"
    );
    Ok(outcome)
}

fn load_config(kind: HookKind, args: &HookArgs) -> Result<HookConfig, HookError> {
    let mut cfg = load_with(args.config.as_deref())?;
    if let Some(path) = &args.log_file {
        cfg.set_log_path(kind, expand_path(path)?);
    }
    Ok(cfg)
}
