pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod extract;
pub mod filter;
pub mod hook_input;
pub mod log_writer;
pub mod status;

pub use config::HookConfig;
pub use engine::{run_hook, run_hook_with_loaded, HookKind, HookOutcome, SkipReason};
pub use error::HookError;
