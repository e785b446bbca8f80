use crate::core::error::{AuthError, TurtleError};
use crate::models::turtle::TurtleFields;

/// Validate a username against the configured minimum length
pub fn validate_username(username: &str, min_length: usize) -> Result<(), AuthError> {
    if username.trim().chars().count() < min_length {
        return Err(AuthError::Validation(format!(
            "username must be at least {} characters in length",
            min_length
        )));
    }

    Ok(())
}

/// Validate email syntax: local@domain.tld, tld 2-4 word characters
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if !is_valid_email(email.trim()) {
        return Err(AuthError::Validation(
            "email is not a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// Validate a password against the configured minimum length
pub fn validate_password(password: &str, min_length: usize) -> Result<(), AuthError> {
    if password.chars().count() < min_length {
        return Err(AuthError::Validation(format!(
            "password must be at least {} characters in length",
            min_length
        )));
    }

    Ok(())
}

/// Validate that all three turtle fields are present and non-empty
pub fn validate_turtle_fields(fields: &TurtleFields) -> Result<(), TurtleError> {
    let required = [
        ("name", &fields.name),
        ("weapon", &fields.weapon),
        ("headbandColor", &fields.headband_color),
    ];

    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(TurtleError::Validation(format!(
                "{} must not be empty",
                label
            )));
        }
    }

    Ok(())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(|c| is_word_char(c) || c == '.') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let (tld, rest) = labels.split_last().expect("at least two labels");

    if !(2..=4).contains(&tld.chars().count()) || !tld.chars().all(is_word_char) {
        return false;
    }

    rest.iter()
        .all(|label| !label.is_empty() && label.chars().all(is_word_char))
}
