//! Test factory for creating Serenity Interaction objects.

use serenity::all::Interaction;

/// Creates a ping interaction, the simplest non-command interaction kind.
///
/// # Returns
/// - `Interaction` - An `Interaction::Ping` for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into an Interaction (indicates invalid test data)
pub fn create_test_ping_interaction() -> Interaction {
    serde_json::from_value(serde_json::json!({
        "id": "400000000000000000",
        "application_id": "100000000000000001",
        "type": 1,
        "token": "test-interaction-token",
        "version": 1,
        "guild_locale": null,
    }))
    .expect("Failed to create test ping interaction - invalid JSON structure")
}
