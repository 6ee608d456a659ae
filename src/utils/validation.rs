// src/utils/validation.rs
use crate::models::{Credentials, FieldErrors};

// Field length bounds, counted in characters
const MAX_USERNAME_CHARS: usize = 50;
const MIN_PASSWORD_CHARS: usize = 6;
const MAX_PASSWORD_CHARS: usize = 100;

pub const USERNAME_REQUIRED: &str = "Username is required.";
pub const USERNAME_TOO_LONG: &str = "Username must be at most 50 characters.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 100 characters.";

/// Validates username presence and length
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err(USERNAME_REQUIRED);
    }

    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err(USERNAME_TOO_LONG);
    }

    Ok(())
}

/// Validates password length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let chars = password.chars().count();

    if chars < MIN_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }

    if chars > MAX_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_LONG);
    }

    Ok(())
}

/// Runs both field validators and collects every failure, so the form can
/// surface all inline messages in one pass.
pub fn validate_credentials(credentials: &Credentials) -> FieldErrors {
    FieldErrors {
        username: validate_username(&credentials.username).err(),
        password: validate_password(&credentials.password).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(validate_username("testuser").is_ok());
        assert!(validate_username("a").is_ok());
        assert_eq!(validate_username(""), Err(USERNAME_REQUIRED));

        let at_limit = "u".repeat(50);
        assert!(validate_username(&at_limit).is_ok());

        let over_limit = "u".repeat(51);
        assert_eq!(validate_username(&over_limit), Err(USERNAME_TOO_LONG));
    }

    #[test]
    fn test_username_length_counts_characters_not_bytes() {
        // 50 two-byte characters is still 50 characters
        let umlauts = "ü".repeat(50);
        assert!(validate_username(&umlauts).is_ok());
        assert_eq!(validate_username(&"ü".repeat(51)), Err(USERNAME_TOO_LONG));
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("123456").is_ok());
        assert_eq!(validate_password("12345"), Err(PASSWORD_TOO_SHORT));
        assert_eq!(validate_password(""), Err(PASSWORD_TOO_SHORT));

        let at_limit = "p".repeat(100);
        assert!(validate_password(&at_limit).is_ok());
        assert_eq!(validate_password(&"p".repeat(101)), Err(PASSWORD_TOO_LONG));
    }

    #[test]
    fn test_credentials_collect_both_errors() {
        let credentials = Credentials {
            username: String::new(),
            password: "123".to_string(),
        };

        let errors = validate_credentials(&credentials);
        assert_eq!(errors.username, Some(USERNAME_REQUIRED));
        assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
        assert!(!errors.is_empty());

        let valid = Credentials {
            username: "testuser".to_string(),
            password: "password123".to_string(),
        };
        assert!(validate_credentials(&valid).is_empty());
    }
}
