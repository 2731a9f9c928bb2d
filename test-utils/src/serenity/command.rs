//! Test factory for creating Serenity CommandData objects.

use serenity::all::CommandData;

/// Guild the test command invocations originate from.
pub const TEST_GUILD_ID: u64 = 200000000000000000;

/// Creates the data of a chat-input slash command invocation.
///
/// The command has no options and no resolved entities, matching the commands
/// the bot registers.
///
/// # Arguments
/// - `name` - Invoked command name, without the leading slash
///
/// # Returns
/// - `CommandData` - A valid Serenity CommandData struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into CommandData (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::command::create_test_command_data;
///
/// let data = create_test_command_data("help");
/// assert_eq!(data.name, "help");
/// ```
pub fn create_test_command_data(name: &str) -> CommandData {
    serde_json::from_value(serde_json::json!({
        "id": "300000000000000000",
        "name": name,
        "type": 1,
        "guild_id": TEST_GUILD_ID.to_string(),
        "options": [],
        "resolved": {},
    }))
    .expect("Failed to create test command data - invalid JSON structure")
}
