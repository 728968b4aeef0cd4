use serde::{Deserialize, Serialize};

/// Inbound chat message from the widget
///
/// The `message` field may be absent or empty; the handler answers with a
/// clarifying prompt in that case instead of rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Outbound reply to the widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_field_is_none() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message, None);

        let request: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert_eq!(request.message, None);
    }
}
