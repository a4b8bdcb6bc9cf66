/// Validation utilities for user input
///
/// Mirrors the service's own rules so obvious rejects fail before a round
/// trip. The service remains authoritative; passing here does not guarantee
/// acceptance.
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, mapping failure to
    /// [`ClientError::Validation`](crate::core::error::ClientError::Validation).
    pub fn into_result(self) -> crate::core::error::Result<()> {
        match self.error {
            None => Ok(()),
            Some(message) => Err(crate::core::error::ClientError::Validation(message)),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate username
pub fn validate_username(username: &str) -> ValidationResult {
    if username.is_empty() {
        return ValidationResult::err("Username is required");
    }

    if username.len() < 3 {
        return ValidationResult::err("Username must be at least 3 characters");
    }

    if username.len() > 20 {
        return ValidationResult::err("Username must be less than 20 characters");
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return ValidationResult::err("Username can only contain letters, numbers, _ and -");
    }

    ValidationResult::ok()
}

/// Validate password
///
/// The service enforces a 6-character minimum; same threshold here.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    ValidationResult::ok()
}

/// Validate an offer draft before listing
pub fn validate_offer(title: &str, price: i64) -> ValidationResult {
    if title.trim().is_empty() {
        return ValidationResult::err("Title is required");
    }

    if price <= 0 {
        return ValidationResult::err("Price must be greater than 0");
    }

    ValidationResult::ok()
}

/// Validate a deal chat message
pub fn validate_message(message: &str) -> ValidationResult {
    if message.trim().is_empty() {
        return ValidationResult::err("Message is required");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("alice").is_valid);
        assert!(validate_username("user_123").is_valid);
        assert!(validate_username("dash-name").is_valid);
        assert!(!validate_username("").is_valid);
        assert!(!validate_username("ab").is_valid);
        assert!(!validate_username("this_username_is_way_too_long").is_valid);
        assert!(!validate_username("bad name").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret1").is_valid);
        assert!(validate_password("123456").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(!validate_password("12345").is_valid);
    }

    #[test]
    fn test_offer_validation() {
        assert!(validate_offer("Immortal account", 1000).is_valid);
        assert!(!validate_offer("", 1000).is_valid);
        assert!(!validate_offer("   ", 1000).is_valid);
        assert!(!validate_offer("Immortal account", 0).is_valid);
        assert!(!validate_offer("Immortal account", -5).is_valid);
    }

    #[test]
    fn test_message_validation() {
        assert!(validate_message("hello").is_valid);
        assert!(!validate_message("").is_valid);
        assert!(!validate_message("   ").is_valid);
    }

    #[test]
    fn test_into_result_maps_to_validation_error() {
        assert!(validate_message("hi").into_result().is_ok());
        let err = validate_message("").into_result().unwrap_err();
        assert_eq!(err.to_string(), "validation error: Message is required");
    }
}
