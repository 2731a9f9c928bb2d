mod server;

use std::{process::ExitCode, sync::Arc};

use crate::server::{
    bot,
    config::{Config, EnvSource},
    error::AppError,
    model::command::{COMMANDS, REPLIES},
    service::{
        command::CommandSet,
        registrar::{self, DiscordCommandRegistrar},
    },
    startup,
};

#[tokio::main]
async fn main() -> ExitCode {
    // `.env` may set RUST_LOG, so it is applied before the subscriber reads it
    dotenvy::dotenv().ok();

    startup::init_tracing(&EnvSource);

    let config = match Config::from_source(&EnvSource) {
        Ok(config) => Arc::new(config),
        Err(err) => {
            startup::report_config_error(&err);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Arc<Config>) -> Result<(), AppError> {
    let commands = Arc::new(CommandSet::new(&COMMANDS, &REPLIES)?);
    tracing::debug!(
        "Loaded commands: {:?}",
        commands.descriptors().iter().map(|d| d.name).collect::<Vec<_>>()
    );

    let listener = startup::bind_liveness(config.port).await?;

    let (client, http) = bot::start::init_bot(&config, commands.clone()).await?;

    // Registration runs independently of gateway readiness
    let registrar = DiscordCommandRegistrar::new(http);
    let guild_id = config.guild_id;
    let registrar_commands = commands.clone();
    tokio::spawn(async move {
        tracing::info!("Started refreshing application (/) commands");
        match registrar::register_commands(&registrar, guild_id, &registrar_commands).await {
            Ok(count) => tracing::info!("Successfully reloaded {} application (/) commands", count),
            Err(e) => tracing::error!("Error refreshing commands: {}", e),
        }
    });

    let liveness = tokio::spawn(startup::serve_liveness(listener));
    let session = tokio::spawn(bot::start::start_bot(client));

    tokio::select! {
        result = session => {
            result.map_err(|e| AppError::InternalError(e.to_string()))??;
            Err(AppError::InternalError("Discord session ended".to_string()))
        }
        result = liveness => {
            result.map_err(|e| AppError::InternalError(e.to_string()))??;
            Err(AppError::InternalError("Liveness server stopped".to_string()))
        }
    }
}
