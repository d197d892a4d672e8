use crate::helpers::NFDRError;
use crate::models::input::InputElement;

use super::functions::{validate_legacy, validate_strict};

/// configuration structure for model config
/// can be used to store functions and constants
#[derive(Debug)]
pub struct NFDRModelConfig {
    pub model_version: String,
    validation_fn: fn(&InputElement) -> Result<(), NFDRError>,
}

impl NFDRModelConfig {
    pub fn new(model_version_str: &str) -> Self {
        let validation_fn: fn(&InputElement) -> Result<(), NFDRError>;
        match model_version_str {
            "strict" => {
                validation_fn = validate_strict;
            }
            "legacy" => {
                validation_fn = validate_legacy;
            }
            _ => {
                validation_fn = validate_legacy;
            }
        }

        NFDRModelConfig {
            model_version: model_version_str.to_owned(),
            validation_fn,
        }
    }

    /// Check the observation against the configured model version.
    /// The legacy version never rejects; the strict one rejects negative
    /// precipitation, negative wind speed and herb stages outside 1..=3.
    pub fn validate(&self, input: &InputElement) -> Result<(), NFDRError> {
        (self.validation_fn)(input)
    }
}
