//! The `explain` command: describe a diagnostic code.

use brisk_diagnostic::ErrorCode;

use crate::DriverError;

/// Look up `code` (e.g. `E0002`) and return its one-line description.
pub fn explain_error(code: &str) -> Result<String, DriverError> {
    let Some(code) = ErrorCode::parse(code) else {
        return Err(DriverError::usage(format!(
            "unknown error code '{code}' (expected E0001-E0006)"
        )));
    };
    Ok(format!("{code}: {}", code.description()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code() {
        assert_eq!(
            explain_error("e0005").ok().as_deref(),
            Some("E0005: invalid escape sequence")
        );
    }

    #[test]
    fn unknown_code() {
        assert!(matches!(explain_error("E9999"), Err(DriverError::Usage(_))));
    }
}
