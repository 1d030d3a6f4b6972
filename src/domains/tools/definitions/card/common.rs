//! Shared helpers for the card tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::error;

/// Create an error result, logging the message for the observability sink.
/// The original failure text is preserved verbatim for the caller.
pub fn error_result(message: &str) -> CallToolResult {
    error!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Serialize an entity (or sequence of entities) as the tool's success
/// payload.
pub fn entity_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_result_is_flagged_as_error() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn entity_result_carries_serialized_payload() {
        let result = entity_result(&json!({"id": "c1"}));
        assert_ne!(result.is_error, Some(true));
    }
}
