use crate::entities::cookie_consent::ActiveModel;
use chrono::{DateTime, Utc};
use sea_orm::{DeriveIntoActiveModel, JsonValue};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of `POST /cookie-consents`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCookieConsent {
    #[validate(
        required(message = "language is required"),
        length(min = 1, max = 16, message = "language must be 1..=16 characters")
    )]
    pub language: Option<String>,
    /// Stored verbatim; only its shape is checked.
    #[serde(default)]
    #[validate(custom(function = "validate_categories"))]
    pub categories: JsonValue,
}

fn validate_categories(categories: &JsonValue) -> Result<(), ValidationError> {
    if categories.is_object() {
        Ok(())
    } else {
        Err(ValidationError::new("object")
            .with_message("categories must be a JSON object".into()))
    }
}

/// Insert shape for a consent row, built after the request context is known.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewCookieConsentRecord {
    pub consented_at: DateTime<Utc>,
    pub language: String,
    pub categories: JsonValue,
    pub ip_hash: Option<String>,
    pub user_agent: Option<String>,
}

impl NewCookieConsent {
    /// Call after validation; a missing language falls back to empty.
    pub fn into_record(
        self,
        ip_hash: Option<String>,
        user_agent: Option<String>,
    ) -> NewCookieConsentRecord {
        NewCookieConsentRecord {
            consented_at: Utc::now(),
            language: self.language.unwrap_or_default(),
            categories: self.categories,
            ip_hash,
            user_agent,
        }
    }
}
