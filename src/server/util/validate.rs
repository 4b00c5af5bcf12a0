use crate::server::error::AppError;

/// Rejects empty or whitespace-only values for a required text field.
///
/// # Arguments
/// - `field` - Name of the field, used in the error message
/// - `value` - The value to check
///
/// # Returns
/// - `Ok(())` - Value contains at least one non-whitespace character
/// - `Err(AppError::BadRequest)` - Value is blank
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Rejects a flavor list containing a blank flavor name.
pub fn require_flavor_names(flavors: &[String]) -> Result<(), AppError> {
    for flavor in flavors {
        require_non_blank("flavors", flavor)?;
    }

    Ok(())
}
