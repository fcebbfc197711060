//! Request and response DTOs.

pub mod request;
pub mod response;

use skillswap_core::error::AppError;
use validator::Validate;

/// Run `validator` checks on a request body, mapping failures to a 400.
pub fn validate(req: &impl Validate) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
