use thiserror::Error;

use super::AppError;

/// Longest accepted entity name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Reason a candidate user, folder, or file name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name is {len} characters long, the limit is {MAX_NAME_LENGTH}")]
    TooLong { len: usize },

    #[error("character '{ch}' is not allowed, use letters, digits, '-' or '_'")]
    InvalidCharacter { ch: char },
}

/// Validates an entity name.
///
/// Checks:
/// - Non-empty
/// - At most 255 characters
/// - Characters are ASCII alphanumeric, '-', or '_'
pub fn validate_name(input: &str) -> Result<(), NameError> {
    if input.is_empty() {
        return Err(NameError::Empty);
    }
    let len = input.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(NameError::TooLong { len });
    }
    match input.chars().find(|c| !is_name_char(*c)) {
        Some(ch) => Err(NameError::InvalidCharacter { ch }),
        None => Ok(()),
    }
}

/// Boolean form of [`validate_name`].
pub fn is_valid_name(input: &str) -> bool {
    validate_name(input).is_ok()
}

/// Validates `input`, wrapping a rejection in [`AppError::InvalidName`].
pub fn ensure_valid_name(input: &str) -> Result<(), AppError> {
    validate_name(input)
        .map_err(|source| AppError::InvalidName { name: input.to_string(), source })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
