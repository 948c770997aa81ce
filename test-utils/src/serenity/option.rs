//! Test factory for creating slash command option data.

use serenity::all::CommandDataOption;

/// Creates a resolved `USER` slash command option.
///
/// # Arguments
/// - `name` - Option name as registered on the command
/// - `user_id` - Discord user ID selected by the invoking user
///
/// # Panics
/// - If the JSON cannot be deserialized into a CommandDataOption (indicates invalid test data)
pub fn create_test_user_option(name: &str, user_id: u64) -> CommandDataOption {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "type": 6,
        "value": user_id.to_string(),
    }))
    .expect("Failed to create test command option - invalid JSON structure")
}

/// Creates a `STRING` slash command option.
pub fn create_test_string_option(name: &str, value: &str) -> CommandDataOption {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "type": 3,
        "value": value,
    }))
    .expect("Failed to create test command option - invalid JSON structure")
}
