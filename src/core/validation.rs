//! Input validation for store operations.

use crate::error::{Result, StoreError};

/// Longest accepted store name, in bytes.
const MAX_NAME_LEN: usize = 128;

/// Validate a store name.
///
/// Store names become file names in the workspace:
/// - Cannot be empty or whitespace
/// - Cannot start with a dot
/// - Cannot contain path separators or control characters
///
/// # Errors
///
/// Returns `StoreError::NameRequired` for an empty name and
/// `StoreError::InvalidName` otherwise.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::NameRequired.into());
    }

    let invalid = |reason: &str| -> crate::error::Error {
        StoreError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    if name.len() > MAX_NAME_LEN {
        return Err(invalid("too long"));
    }
    if name.trim() != name {
        return Err(invalid("leading or trailing whitespace"));
    }
    if name.starts_with('.') {
        return Err(invalid("cannot start with '.'"));
    }
    if let Some(ch) = name
        .chars()
        .find(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
    {
        return Err(invalid(&format!("invalid character {:?}", ch)));
    }

    Ok(())
}

/// Validate a service name.
///
/// # Errors
///
/// Returns `StoreError::EmptyService` if the service is empty.
pub fn validate_service(service: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(StoreError::EmptyService.into());
    }
    Ok(())
}
