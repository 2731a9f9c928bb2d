use crate::server::{
    error::command::CommandError,
    model::command::{CommandDescriptor, CommandReply, COMMANDS, REPLIES},
    service::command::CommandSet,
};
