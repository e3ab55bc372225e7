//! Error types for the rainbow_palette library

use thiserror::Error;

/// Result type alias for rainbow_palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for color conversion and palette generation
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Hex string is not `#RGB` or `#RRGGBB`
    #[error("Invalid hex format: {input:?}")]
    InvalidHexFormat { input: String },

    /// Free-text color matched neither the hex nor the rgb() form
    #[error("Invalid color input: {input:?}")]
    InvalidColorInput { input: String },

    /// Numeric parameter outside its accepted range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Parameter file could not be read or decoded
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an invalid hex format error
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHexFormat {
            input: input.into(),
        }
    }

    /// Create an invalid parameter error from any displayable value
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the caller can recover by asking the user for new input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::InvalidHexFormat { .. } | PaletteError::InvalidColorInput { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidHexFormat { input } => {
                format!("\"{}\" is not a hex color. Use #RGB or #RRGGBB.", input)
            }
            PaletteError::InvalidColorInput { input } => {
                format!(
                    "\"{}\" is not a color. Use #RGB, #RRGGBB or rgb(r, g, b) with channels 0-255.",
                    input
                )
            }
            PaletteError::InvalidParameter { parameter, value } => {
                format!("The value {} is not allowed for {}.", value, parameter)
            }
            PaletteError::ConfigError { .. } => {
                "Could not load palette settings. Please check the file and try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaletteError::invalid_hex("#12");
        assert_eq!(err.to_string(), "Invalid hex format: \"#12\"");

        let err = PaletteError::invalid_parameter("count", -3);
        assert_eq!(err.to_string(), "Invalid parameter: count = -3");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(PaletteError::invalid_hex("nope").is_recoverable());
        assert!(PaletteError::InvalidColorInput {
            input: "rgb(1,2)".into()
        }
        .is_recoverable());
        assert!(!PaletteError::invalid_parameter("saturation", 120).is_recoverable());
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PaletteError::config("Failed to read palette.json", io);
        assert!(err.source().is_some());
        assert!(err.user_message().contains("palette settings"));
    }
}
