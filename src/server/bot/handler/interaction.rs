//! Interaction handler for guild slash commands.
//!
//! Each invocation is looked up in the command set and answered with its fixed
//! ephemeral reply. Every outcome is handled here: unknown names, failed sends
//! and sends exceeding `REPLY_TIMEOUT` are logged and the handler returns, so a
//! single bad interaction never ends the gateway session.

use std::{future::Future, time::Duration};

use serenity::all::{
    CommandData, CommandInteraction, Context, CreateInteractionResponse, Interaction,
};

use crate::server::{error::AppError, service::command::CommandSet};

/// Upper bound on a single reply send.
///
/// Discord expects an interaction to be acknowledged within three seconds; a
/// reply still pending after that can no longer succeed.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(3);

/// Result of dispatching a command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The fixed reply was sent.
    Replied,
    /// The command name has no reply; nothing was sent.
    Unknown,
}

/// Handles an incoming interaction.
///
/// Non-command interactions (components, modals, autocomplete) are ignored.
pub async fn handle_interaction(commands: &CommandSet, ctx: Context, interaction: Interaction) {
    let Some(command) = command_interaction(&interaction) else {
        tracing::debug!("Ignoring {:?} interaction", interaction.kind());
        return;
    };

    let result = dispatch(commands, &command.data, |response| {
        command.create_response(&ctx.http, response)
    })
    .await;

    match result {
        Ok(Dispatch::Replied) => {
            tracing::debug!("Replied to /{} for user {}", command.data.name, command.user.id)
        }
        Ok(Dispatch::Unknown) => {
            tracing::warn!("Received unknown command /{}", command.data.name)
        }
        Err(e) => {
            tracing::error!("Failed to reply to /{}: {}", command.data.name, e)
        }
    }
}

/// Returns the slash command invocation, or `None` for any other interaction kind.
pub fn command_interaction(interaction: &Interaction) -> Option<&CommandInteraction> {
    match interaction {
        Interaction::Command(command) => Some(command),
        _ => None,
    }
}

/// Resolves the invoked command and sends its reply through `send`.
///
/// `send` is only called for known commands and is bounded by `REPLY_TIMEOUT`.
///
/// # Returns
/// - `Ok(Dispatch::Replied)` - Reply sent
/// - `Ok(Dispatch::Unknown)` - No reply defined for the command name
/// - `Err(AppError::DiscordErr)` - Sending the reply failed
/// - `Err(AppError::ReplyTimeout)` - Sending the reply did not finish in time
pub async fn dispatch<F, Fut>(
    commands: &CommandSet,
    data: &CommandData,
    send: F,
) -> Result<Dispatch, AppError>
where
    F: FnOnce(CreateInteractionResponse) -> Fut,
    Fut: Future<Output = Result<(), serenity::Error>>,
{
    let Some(reply) = commands.reply(&data.name) else {
        return Ok(Dispatch::Unknown);
    };

    tokio::time::timeout(REPLY_TIMEOUT, send(reply.to_response()))
        .await
        .map_err(|_| AppError::ReplyTimeout(REPLY_TIMEOUT))??;

    Ok(Dispatch::Replied)
}
