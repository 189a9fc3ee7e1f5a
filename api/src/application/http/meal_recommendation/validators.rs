use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateTextValidator {
    #[validate(length(min = 1, message = "prompt is required"))]
    #[schema(example = "Suggest a quick dinner with leeks")]
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_is_rejected() {
        let payload = GenerateTextValidator {
            prompt: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("prompt"));
    }

    #[test]
    fn test_prompt_is_accepted() {
        let payload: GenerateTextValidator =
            serde_json::from_str(r#"{ "prompt": "Suggest a quick dinner" }"#).unwrap();
        assert!(payload.validate().is_ok());
    }
}
