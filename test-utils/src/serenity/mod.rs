//! Test factories for creating Serenity API objects.
//!
//! Code that handles Discord events receives Serenity models that cannot be
//! constructed directly. These factories create valid objects by deserializing
//! JSON, simulating what Discord's gateway would deliver.
//!
//! # Available Factories
//!
//! - `command::create_test_command_data` - Create slash command invocation data
//! - `interaction::create_test_ping_interaction` - Create a non-command interaction

pub mod command;
pub mod interaction;

pub use command::create_test_command_data;
pub use interaction::create_test_ping_interaction;
