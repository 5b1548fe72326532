use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to match a student against the catalog
///
/// Both fields are optional at the serde level so that a missing field is
/// reported through validation rather than as a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(required)]
    pub skills: Option<Vec<String>>,
    #[validate(required, custom(function = "not_blank"))]
    pub interest: Option<String>,
}

/// Question for the canned-reply assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantRequest {
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
