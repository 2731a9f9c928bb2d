use std::{collections::HashMap, num::NonZeroU16};

use serenity::all::{ApplicationId, GuildId};

use crate::server::error::config::{ConfigError, FieldStatus};

/// Port used by the liveness server when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

const TOKEN_VARS: (&str, &str) = ("DISCORD_TOKEN", "TOKEN");
const APPLICATION_ID_VARS: (&str, &str) = ("CLIENT_ID", "APPLICATION_ID");
const GUILD_ID_VARS: (&str, &str) = ("GUILD_ID", "DEPLOYMENT_ID");
const PORT_VAR: &str = "PORT";

/// Key/value lookup the configuration is read from.
///
/// Production reads the process environment (after `.env` has been applied by
/// `dotenvy`); tests use a `HashMap`.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Process environment.
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

pub struct Config {
    pub discord_token: String,
    pub application_id: ApplicationId,
    pub guild_id: GuildId,
    pub port: u16,
}

impl Config {
    /// Builds the configuration from `source`.
    ///
    /// Each required value is looked up under its primary name first, then its
    /// alias. Empty or whitespace-only values count as missing. All required
    /// values are checked before failing so the error can report every field.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and valid
    /// - `Err(ConfigError::Missing)` - One or more required values absent
    /// - `Err(ConfigError::InvalidId)` - An identifier is not a Discord snowflake
    /// - `Err(ConfigError::InvalidPort)` - `PORT` is not a valid port number
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let token = lookup(source, TOKEN_VARS);
        let application_id = lookup(source, APPLICATION_ID_VARS);
        let guild_id = lookup(source, GUILD_ID_VARS);

        let (Some(token), Some(application_id), Some(guild_id)) =
            (token.clone(), application_id.clone(), guild_id.clone())
        else {
            return Err(ConfigError::Missing {
                fields: vec![
                    FieldStatus::new(TOKEN_VARS.0, token.is_some()),
                    FieldStatus::new(APPLICATION_ID_VARS.0, application_id.is_some()),
                    FieldStatus::new(GUILD_ID_VARS.0, guild_id.is_some()),
                ],
            });
        };

        let port = match source.get(PORT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse::<NonZeroU16>()
                .map_err(|e| ConfigError::InvalidPort {
                    value: value.clone(),
                    source: e,
                })?
                .get(),
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_token: token,
            application_id: ApplicationId::new(parse_snowflake(
                APPLICATION_ID_VARS.0,
                &application_id,
            )?),
            guild_id: GuildId::new(parse_snowflake(GUILD_ID_VARS.0, &guild_id)?),
            port,
        })
    }
}

fn lookup(source: &impl ConfigSource, (primary, alias): (&str, &str)) -> Option<String> {
    [primary, alias]
        .into_iter()
        .filter_map(|key| source.get(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Parses a Discord snowflake; zero is rejected since Serenity ids are non-zero.
fn parse_snowflake(field: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidId {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod test;
