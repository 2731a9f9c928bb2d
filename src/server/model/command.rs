use serenity::all::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};

/// Slash command as registered with Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

impl CommandDescriptor {
    /// Converts the descriptor into the Serenity builder sent to the
    /// bulk-overwrite endpoint.
    pub fn to_create_command(&self) -> CreateCommand {
        CreateCommand::new(self.name).description(self.description)
    }
}

/// Fixed reply sent when a command is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandReply {
    pub content: &'static str,
    /// Visible only to the invoking user.
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn to_response(&self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(self.content)
                .ephemeral(self.ephemeral),
        )
    }
}

/// Commands registered for the guild, in registration order.
pub const COMMANDS: [CommandDescriptor; 3] = [
    CommandDescriptor {
        name: "help",
        description: "List all commands",
    },
    CommandDescriptor {
        name: "navigation",
        description: "Get navigation help",
    },
    CommandDescriptor {
        name: "morecommands",
        description: "List more commands",
    },
];

/// Reply table keyed by command name.
pub const REPLIES: [(&str, CommandReply); 3] = [
    (
        "help",
        CommandReply {
            content: "Here are the available commands:\n\
                      /help - List all commands\n\
                      /navigation - Get navigation help\n\
                      /morecommands - List more commands",
            ephemeral: true,
        },
    ),
    (
        "navigation",
        CommandReply {
            content: "Navigation help:\n\
                      1. Use the channels on the left to navigate.\n\
                      2. Use @mentions to get attention.\n\
                      3. Check pinned messages for important info.",
            ephemeral: true,
        },
    ),
    (
        "morecommands",
        CommandReply {
            content: "More commands:\n\
                      1. /rules - List server rules\n\
                      2. /info - Get server info\n\
                      3. /contact - Contact server admins",
            ephemeral: true,
        },
    ),
];
