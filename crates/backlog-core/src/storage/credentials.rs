//! API key lookup
//!
//! The key is never written to disk. It comes from `--api-key` or the
//! BACKLOG_API_KEY environment variable.

use std::env;

pub const API_KEY_ENV: &str = "BACKLOG_API_KEY";

/// BACKLOG_API_KEY if set and non-empty.
pub fn get_api_key() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

/// CLI-provided key first, then the environment.
pub fn resolve_api_key(cli_key: Option<&str>) -> Option<String> {
    cli_key
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(get_api_key)
}
