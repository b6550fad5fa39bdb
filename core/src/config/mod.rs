pub mod load;
pub mod types;

pub use load::{expand_path, load_with};
pub use types::{
    HookConfig, DEFAULT_ALL_LOG_PATH, DEFAULT_FAILURE_LOG_PATH, DEFAULT_TARGET_TOOL,
};
