use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::server::bot::handler::Handler;
use crate::server::config::Config;
use crate::server::error::AppError;
use crate::server::service::command::CommandSet;

/// Builds the Discord client and returns it along with its HTTP client.
///
/// The application id is set on the client so the shared `Http` can reach the
/// application command endpoints before the gateway reports ready.
///
/// # Arguments
/// - `config` - Application configuration
/// - `commands` - Validated command set answered by the interaction handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start, plus its HTTP client
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
    commands: Arc<CommandSet>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(commands);

    let client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// Should be called from within a tokio::spawn task since it will block until
/// the gateway session shuts down.
///
/// # Returns
/// - `Ok(())` if the session ends cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
