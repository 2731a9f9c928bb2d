//! Service layer for command handling and registration.
//!
//! Services sit between the bot event handlers and the Discord API. They are
//! responsible for:
//!
//! - **Validation**: Checking that registered commands and replies agree
//! - **Lookup**: Resolving an invoked command name to its fixed reply
//! - **Registration**: Pushing the command list to Discord for the configured guild

pub mod command;
pub mod registrar;

#[cfg(test)]
mod test;
