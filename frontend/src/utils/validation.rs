//! Validation utilities for user input
//!
//! Every form validates locally before any network call; a failed validation
//! short-circuits with a notification and sends nothing to the server.

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
}

/// Validate the login form
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    if email.is_empty() || password.is_empty() {
        return ValidationResult::err("Please fill in all fields");
    }

    ValidationResult::ok()
}

/// Validate the registration form
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> ValidationResult {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return ValidationResult::err("Please fill in all required fields");
    }

    if password != confirm_password {
        return ValidationResult::err("Passwords do not match");
    }

    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    ValidationResult::ok()
}

/// Validate a rating before submission (stars are 1-5; 0 means unselected)
pub fn validate_rating(rating: u8) -> ValidationResult {
    if rating == 0 {
        return ValidationResult::err("Please select a rating");
    }

    if rating > 5 {
        return ValidationResult::err("Rating must be between 1 and 5");
    }

    ValidationResult::ok()
}

/// Validate the story generation form
pub fn validate_generation(title: &str, theme: &str, age_group: &str) -> ValidationResult {
    if title.trim().is_empty() {
        return ValidationResult::err("Please enter a story title");
    }

    if theme.is_empty() {
        return ValidationResult::err("Please select a theme");
    }

    if age_group.is_empty() {
        return ValidationResult::err("Please select an age group");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        assert!(validate_login("demo@storyland.com", "demo123").is_valid);
        assert!(!validate_login("", "demo123").is_valid);
        assert!(!validate_login("demo@storyland.com", "").is_valid);
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration("a@b.com", "secret1", "secret1").is_valid);
        assert!(!validate_registration("", "secret1", "secret1").is_valid);
        assert!(!validate_registration("a@b.com", "secret1", "secret2").is_valid);
        assert!(!validate_registration("a@b.com", "short", "short").is_valid);
    }

    #[test]
    fn test_rating_validation() {
        // An unselected rating must be rejected before any request is made
        assert!(!validate_rating(0).is_valid);
        assert!(validate_rating(1).is_valid);
        assert!(validate_rating(5).is_valid);
        assert!(!validate_rating(6).is_valid);
    }

    #[test]
    fn test_generation_validation() {
        assert!(validate_generation("The Sleepy Cloud", "bedtime", "3-5").is_valid);
        assert!(!validate_generation("   ", "bedtime", "3-5").is_valid);
        assert!(!validate_generation("The Sleepy Cloud", "", "3-5").is_valid);
        assert!(!validate_generation("The Sleepy Cloud", "bedtime", "").is_valid);
    }
}
