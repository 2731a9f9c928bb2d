//! Environment fixtures for configuration loading tests.
//!
//! Maps stand in for the process environment so tests never touch global state.

use std::collections::HashMap;

pub const TOKEN: &str = "test-bot-token";
pub const CLIENT_ID: &str = "100000000000000001";
pub const GUILD_ID: &str = "100000000000000002";

/// Builds an environment map from key/value pairs.
pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Environment with every required variable set under its primary name and
/// `PORT` unset.
pub fn valid_env() -> HashMap<String, String> {
    env_map(&[
        ("DISCORD_TOKEN", TOKEN),
        ("CLIENT_ID", CLIENT_ID),
        ("GUILD_ID", GUILD_ID),
    ])
}
