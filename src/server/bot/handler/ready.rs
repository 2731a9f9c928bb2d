//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. Serenity
//! fires it again after every successful reconnect handshake.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Only logs connection information; command registration does not wait on it.
///
/// # Arguments
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}
