pub mod args;
pub mod run;

pub use args::HookArgs;
pub use run::{execute, run_main};
