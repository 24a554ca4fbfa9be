use regex::Regex;
use std::sync::LazyLock;

use crate::errors::ValidationError;

static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Trim and check a handle before any request is made for it
pub fn validate_username(input: &str) -> Result<String, ValidationError> {
    let username = input.trim();

    if username.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !HANDLE_PATTERN.is_match(username) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(username.to_string())
}
