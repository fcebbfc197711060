//! Password strength validation.

use zxcvbn::{zxcvbn, Score};

use skillswap_core::config::auth::AuthConfig;
use skillswap_core::error::AppError;

/// Validates new passwords against length and strength policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum allowed length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.min_password_length,
        }
    }

    /// Check a candidate password, rejecting short or guessable ones.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }

        let estimate = zxcvbn(password, &[]);
        if estimate.score() < Score::Two {
            return Err(AppError::validation(
                "Password is too easy to guess; choose a stronger one",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig {
            jwt_secret: "unused".to_string(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
            min_password_length: 8,
        })
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(validator().validate("abc").is_err());
    }

    #[test]
    fn test_guessable_password_rejected() {
        assert!(validator().validate("password").is_err());
    }

    #[test]
    fn test_strong_password_accepted() {
        assert!(validator().validate("violet-Tractor-91-moon").is_ok());
    }
}
