use thiserror::Error;

/// Inconsistencies between the registered command list and the reply table.
///
/// Any of these would leave a command that Discord shows to users but the bot
/// never answers (or the reverse), so they abort startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A command is registered with Discord but has no reply.
    #[error("Command '/{name}' is registered but has no reply")]
    Unreplied { name: String },

    /// A reply exists for a command that is never registered.
    #[error("Reply defined for unregistered command '/{name}'")]
    Unregistered { name: String },

    /// The same command name is declared more than once.
    #[error("Command '/{name}' is declared more than once")]
    Duplicate { name: String },
}
