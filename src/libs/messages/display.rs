//! Display text for [`Message`] variants.
//!
//! One match keeps all wording in a single place, so messages read the same
//! whether they end up on the console or in the log.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSavedTo(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::InvalidDateFormat(pattern) => format!("Invalid date format pattern: '{}'", pattern),

            // === INPUT MESSAGES ===
            Message::InputReadFailed(source) => format!("Failed to read tasks from {}", source),
            Message::InvalidTasksJson(error) => format!("Invalid task data: {}", error),
            Message::InvalidTodayDate(raw) => format!("Invalid date '{}'. Use YYYY-MM-DD format", raw),
            Message::TasksLoaded(count) => format!("Loaded {} task(s)", count),

            // === RENDER MESSAGES ===
            Message::NoTasksToRender => "No tasks matched, nothing to render".to_string(),
            Message::TasksRendered(count) => format!("Rendered {} task card(s)", count),
            Message::RenderFailed(error) => format!("Failed to render tasks: {}", error),
            Message::OutputWritten(path) => format!("Task cards written to {}", path),
            Message::OutputWriteFailed(path) => format!("Failed to write task cards to {}", path),
        };
        write!(f, "{}", text)
    }
}
