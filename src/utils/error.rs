use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown input: {name}")]
    UnknownInput { name: String },
}

impl CalcError {
    /// Short message meant for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("Could not read or write a file: {}", e),
            CalcError::SerializationError(_) => "Could not encode the transcript".to_string(),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
            CalcError::UnknownInput { name } => format!("'{}' is not a calculator input", name),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::IoError(_) => "Check that the path exists and is readable".to_string(),
            CalcError::SerializationError(_) => "Re-run with --verbose for details".to_string(),
            CalcError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            CalcError::InvalidConfigValueError { reason, .. } => reason.clone(),
            CalcError::UnknownInput { .. } => {
                "Use a digit, an operator name (division, multiplication, subtraction, addition) \
                 or an action name (clear, remove_character, percentage, calculate, change_sign, decimal_point)"
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
