use std::collections::{HashMap, HashSet};

use serenity::all::CreateCommand;

use crate::server::{
    error::command::CommandError,
    model::command::{CommandDescriptor, CommandReply},
};

/// Validated pairing of registered commands and their replies.
///
/// Built once at startup and shared read-only with the registrar and the
/// interaction handler.
pub struct CommandSet {
    descriptors: Vec<CommandDescriptor>,
    replies: HashMap<&'static str, CommandReply>,
}

impl CommandSet {
    /// Pairs `descriptors` with `replies`.
    ///
    /// Both sides must name exactly the same commands. Descriptor order is kept
    /// since it is the order commands are registered with Discord.
    ///
    /// # Returns
    /// - `Ok(CommandSet)` - Every descriptor has a reply and vice versa
    /// - `Err(CommandError::Duplicate)` - A name appears twice on either side
    /// - `Err(CommandError::Unreplied)` - A descriptor has no reply
    /// - `Err(CommandError::Unregistered)` - A reply has no descriptor
    pub fn new(
        descriptors: &[CommandDescriptor],
        replies: &[(&'static str, CommandReply)],
    ) -> Result<Self, CommandError> {
        let mut registered = HashSet::new();
        for descriptor in descriptors {
            if !registered.insert(descriptor.name) {
                return Err(CommandError::Duplicate {
                    name: descriptor.name.to_string(),
                });
            }
        }

        let mut reply_map = HashMap::new();
        for (name, reply) in replies {
            if reply_map.insert(*name, *reply).is_some() {
                return Err(CommandError::Duplicate {
                    name: name.to_string(),
                });
            }
            if !registered.contains(name) {
                return Err(CommandError::Unregistered {
                    name: name.to_string(),
                });
            }
        }

        if let Some(descriptor) = descriptors
            .iter()
            .find(|d| !reply_map.contains_key(d.name))
        {
            return Err(CommandError::Unreplied {
                name: descriptor.name.to_string(),
            });
        }

        Ok(Self {
            descriptors: descriptors.to_vec(),
            replies: reply_map,
        })
    }

    /// Returns the reply for an invoked command, or `None` for unknown names.
    pub fn reply(&self, name: &str) -> Option<&CommandReply> {
        self.replies.get(name)
    }

    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    /// Builds the bulk-overwrite payload in registration order.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.descriptors
            .iter()
            .map(CommandDescriptor::to_create_command)
            .collect()
    }
}
