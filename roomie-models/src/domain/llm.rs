use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[validate(length(min = 1, max = 8000, message = "content must be 1..=8000 characters"))]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(
        length(min = 1, max = 50, message = "messages must hold 1..=50 entries"),
        nested
    )]
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST /openai`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PromptRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_prompt"))]
    pub prompt: String,
}

fn validate_prompt(prompt: &String) -> Result<(), ValidationError> {
    if prompt.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("prompt must not be empty".into()));
    }
    if prompt.chars().count() > 8000 {
        return Err(ValidationError::new("length")
            .with_message("prompt must be at most 8000 characters".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptResponse {
    pub text: String,
}
