use std::path::PathBuf;

use clap::Parser;

/// Options shared by both hook binaries. The host normally passes none.
#[derive(Parser, Debug, Clone, Default)]
#[command(version)]
pub struct HookArgs {
    /// Append to this file instead of the configured log.
    #[arg(long)]
    pub log_file: Option<String>,

    /// TOML config file (overrides `BASH_HOOKS_CONFIG`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra arguments some hosts append (event names and the like); ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub host_args: Vec<String>,
}
