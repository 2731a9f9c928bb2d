//! Discord bot integration for guild slash commands.
//!
//! The bot opens a single gateway session and answers the guild's slash commands
//! with fixed ephemeral replies. Reconnection, heartbeats and rate limiting are
//! handled by Serenity.
//!
//! The bot is initialized during startup and runs in a separate tokio task so it
//! does not block the liveness server. Its HTTP client is shared with the command
//! registrar, which pushes the command list without waiting for the gateway.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent. Interactions are delivered to every
//! bot regardless of intents.

pub mod handler;
pub mod start;
