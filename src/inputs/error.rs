//! inputs::error
//!
//! Errors from argument resolution and prompting.

use thiserror::Error;

use crate::core::settings::SettingsError;

/// Errors from the input layer.
///
/// None of these are retried. The invoking command reports them and exits
/// non-zero.
#[derive(Debug, Error)]
pub enum InputError {
    /// A raw value could not be converted to the argument's type.
    #[error("invalid value '{raw}' for {name}: expected {expected}")]
    Parse {
        name: String,
        raw: String,
        expected: &'static str,
    },

    /// A required argument has no value from any source.
    #[error(
        "Required parameter {name} not supplied.\n\
         Try adding a switch to the end of your command: --{name} <{label}>"
    )]
    MissingRequired { name: String, label: String },

    /// A value exists but has a different type than the caller asked for.
    #[error("argument {name} is a {actual}, not a {expected}")]
    WrongType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The interactive input channel failed.
    #[error("failed to read input: {0}")]
    Prompt(#[source] std::io::Error),

    /// Loading or saving settings failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl InputError {
    /// Name of the argument this error concerns, if any.
    pub fn argument(&self) -> Option<&str> {
        match self {
            InputError::Parse { name, .. }
            | InputError::MissingRequired { name, .. }
            | InputError::WrongType { name, .. } => Some(name),
            InputError::Prompt(_) | InputError::Settings(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_message() {
        let err = InputError::MissingRequired {
            name: "work-item-id".into(),
            label: "Work Item ID".into(),
        };
        assert_eq!(
            err.to_string(),
            "Required parameter work-item-id not supplied.\n\
             Try adding a switch to the end of your command: --work-item-id <Work Item ID>"
        );
        assert_eq!(err.argument(), Some("work-item-id"));
    }

    #[test]
    fn prompt_error_has_no_argument() {
        let err = InputError::Prompt(std::io::Error::other("closed"));
        assert_eq!(err.argument(), None);
        assert!(err.to_string().contains("closed"));
    }
}
