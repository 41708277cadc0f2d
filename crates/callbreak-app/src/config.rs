use std::env;
use std::path::PathBuf;

pub const STATE_FILE_ENV: &str = "CBTRACK_STATE_FILE";
pub const DEFAULT_STATE_FILE: &str = "callbreak_state.json";

/// Resolve the state file path: explicit flag, then environment, then the
/// default file in the working directory.
pub fn state_file(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }
    match env::var_os(STATE_FILE_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_STATE_FILE),
    }
}
