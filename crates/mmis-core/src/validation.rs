//! Form Validation
//!
//! Superficial checks run before posting to the backend. The `Display` text
//! of each error is what the user sees.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select fixture and quantity")]
    MissingFixtureOrQuantity,
    #[error("Enter return quantity")]
    MissingReturnQuantity,
    #[error("Return quantity must be between 1 and {max}")]
    ReturnQuantityOutOfRange { max: i32 },
    #[error("Please select a fixture and enter a valid quantity")]
    InvalidTransfer,
    #[error("Insufficient stock. Available: {available}")]
    InsufficientStock { available: i32 },
    #[error("Please enter a valid quantity to add (must be greater than 0)")]
    InvalidRestockQuantity,
    #[error("Please fill in required fields (Item Name and Current Quantity)")]
    MissingStockFields,
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
    #[error("Please fill in all required fields. {0} is required.")]
    MissingRequired(&'static str),
    #[error("Please fill in {0}")]
    MissingField(&'static str),
    #[error("Please enter a project name")]
    EmptyProjectName,
    #[error("This project already exists")]
    DuplicateProject,
    #[error("Cannot delete default projects")]
    DefaultProject,
    #[error("Project not found")]
    UnknownProject,
}

/// Parse a whole number from a form field
pub fn parse_whole(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Trimmed text, or `None` when blank (sent as JSON `null`)
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Fixture id and quantity for an item request
pub fn validate_request(fixture: &str, quantity: &str) -> Result<(u32, i32), ValidationError> {
    let fixture_id: u32 = fixture
        .trim()
        .parse()
        .map_err(|_| ValidationError::MissingFixtureOrQuantity)?;
    match parse_whole(quantity) {
        Some(qty) if qty >= 1 => Ok((fixture_id, qty)),
        _ => Err(ValidationError::MissingFixtureOrQuantity),
    }
}

/// Returned quantity, bounded by what was taken
pub fn validate_return(quantity: &str, taken: i32) -> Result<i32, ValidationError> {
    if quantity.trim().is_empty() {
        return Err(ValidationError::MissingReturnQuantity);
    }
    match parse_whole(quantity) {
        Some(qty) if (1..=taken).contains(&qty) => Ok(qty),
        _ => Err(ValidationError::ReturnQuantityOutOfRange { max: taken }),
    }
}

/// Fixture id and quantity for a transfer out of a source holding `available`
pub fn validate_transfer(
    fixture: &str,
    quantity: &str,
    available: i32,
) -> Result<(u32, i32), ValidationError> {
    let fixture_id: u32 = fixture
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidTransfer)?;
    let qty = match parse_whole(quantity) {
        Some(qty) if qty > 0 => qty,
        _ => return Err(ValidationError::InvalidTransfer),
    };
    if qty > available {
        return Err(ValidationError::InsufficientStock { available });
    }
    Ok((fixture_id, qty))
}

pub fn validate_restock_quantity(quantity: &str) -> Result<i32, ValidationError> {
    match parse_whole(quantity) {
        Some(qty) if qty > 0 => Ok(qty),
        _ => Err(ValidationError::InvalidRestockQuantity),
    }
}

/// Per-field messages for the change-password form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordErrors {
    pub current: Option<&'static str>,
    pub new: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl PasswordErrors {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.new.is_none() && self.confirm.is_none()
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> PasswordErrors {
    let mut errors = PasswordErrors::default();

    if current.is_empty() {
        errors.current = Some("Current password is required");
    }

    if new.is_empty() {
        errors.new = Some("New password is required");
    } else if new.chars().count() < MIN_PASSWORD_LEN {
        errors.new = Some("New password must be at least 6 characters");
    }

    if confirm.is_empty() {
        errors.confirm = Some("Please confirm your new password");
    } else if new != confirm {
        errors.confirm = Some("Passwords do not match");
    }

    if !current.is_empty() && !new.is_empty() && current == new {
        errors.new = Some("New password must be different from current password");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_request() {
        assert_eq!(validate_request("3", "2"), Ok((3, 2)));
        assert_eq!(validate_request("", "2"), Err(ValidationError::MissingFixtureOrQuantity));
        assert_eq!(validate_request("3", ""), Err(ValidationError::MissingFixtureOrQuantity));
        assert_eq!(validate_request("3", "0"), Err(ValidationError::MissingFixtureOrQuantity));
    }

    #[test]
    fn test_validate_return_bounds() {
        assert_eq!(validate_return("", 5), Err(ValidationError::MissingReturnQuantity));
        assert_eq!(validate_return("5", 5), Ok(5));
        assert_eq!(
            validate_return("6", 5),
            Err(ValidationError::ReturnQuantityOutOfRange { max: 5 })
        );
        assert_eq!(
            validate_return("abc", 5),
            Err(ValidationError::ReturnQuantityOutOfRange { max: 5 })
        );
    }

    #[test]
    fn test_validate_transfer() {
        assert_eq!(validate_transfer("1", "4", 4), Ok((1, 4)));
        assert_eq!(validate_transfer("", "4", 4), Err(ValidationError::InvalidTransfer));
        assert_eq!(validate_transfer("1", "-1", 4), Err(ValidationError::InvalidTransfer));
        let err = validate_transfer("1", "5", 4).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient stock. Available: 4");
    }

    #[test]
    fn test_validate_restock_quantity() {
        assert_eq!(validate_restock_quantity(" 10 "), Ok(10));
        assert_eq!(validate_restock_quantity("0"), Err(ValidationError::InvalidRestockQuantity));
    }

    #[test]
    fn test_password_change_rules() {
        let errors = validate_password_change("", "", "");
        assert_eq!(errors.current, Some("Current password is required"));
        assert_eq!(errors.new, Some("New password is required"));
        assert_eq!(errors.confirm, Some("Please confirm your new password"));

        let errors = validate_password_change("secret1", "short", "other");
        assert_eq!(errors.new, Some("New password must be at least 6 characters"));
        assert_eq!(errors.confirm, Some("Passwords do not match"));

        let errors = validate_password_change("secret1", "secret1", "secret1");
        assert_eq!(errors.new, Some("New password must be different from current password"));

        assert!(validate_password_change("secret1", "secret2", "secret2").is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" x "), Some("x".to_string()));
    }
}
