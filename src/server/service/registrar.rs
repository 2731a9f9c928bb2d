//! Guild slash command registration.
//!
//! Commands are pushed with Discord's bulk-overwrite endpoint for a single
//! guild. The endpoint replaces whatever was registered before, so calling it
//! again with the same command set leaves the remote state unchanged.

use std::sync::Arc;

use serenity::all::{CreateCommand, GuildId};
use serenity::async_trait;
use serenity::http::Http;

use crate::server::{error::AppError, service::command::CommandSet};

/// Destination of guild command registration.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Replaces every command registered for `guild_id` with `commands`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands now registered for the guild
    /// - `Err(AppError)` - Request rejected or failed to reach Discord
    async fn overwrite_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError>;
}

/// Registers commands through the bot's Serenity HTTP client.
///
/// The client must have its application id set, which `bot::start::init_bot`
/// does from configuration.
pub struct DiscordCommandRegistrar {
    http: Arc<Http>,
}

impl DiscordCommandRegistrar {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandRegistrar for DiscordCommandRegistrar {
    async fn overwrite_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError> {
        let registered = guild_id.set_commands(&self.http, commands).await?;

        Ok(registered.len())
    }
}

/// Registers the full command set for `guild_id`.
///
/// A single request is made and failures are returned to the caller without
/// retrying. Startup logs the error and keeps running, since commands from a
/// previous registration still work.
pub async fn register_commands(
    registrar: &dyn CommandRegistrar,
    guild_id: GuildId,
    commands: &CommandSet,
) -> Result<usize, AppError> {
    registrar
        .overwrite_guild_commands(guild_id, commands.create_commands())
        .await
}
