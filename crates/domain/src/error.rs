//! Error types shared across the workspace.
//!
//! Three classes of failure reach the operator: an HTTP response outside the
//! 2xx range, a request that never completed, and form input that cannot be
//! converted into a wire value. Adapters construct the first two; the command
//! parsers in [`crate::command`] and the codec in [`crate::time`] produce the
//! third.

/// Failure of a single device API call or of the conversion leading up to it.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// The device answered with a non-2xx status. The response body is never
    /// inspected for these.
    #[error("HTTP {status} {status_text}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Status text as reported by the HTTP stack.
        status_text: String,
    },

    /// The request never completed (unreachable host, connection dropped).
    #[error("network error: {0}")]
    Network(String),

    /// Operator input could not be converted into a wire value.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DeviceError {
    /// Whether this error came from malformed operator input rather than
    /// from the device or the network.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Malformed operator input detected during form-to-wire conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not a parseable "HH:MM" time of day.
    #[error("invalid time of day: {input:?}")]
    InvalidTime { input: String },

    /// A numeric form field that does not parse.
    #[error("invalid {field}: {input:?}")]
    InvalidNumber {
        field: &'static str,
        input: String,
    },

    /// A discrete selector value outside the known set.
    #[error("invalid {field}: {input:?}")]
    InvalidChoice {
        field: &'static str,
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_http_error_with_status_and_text() {
        let err = DeviceError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn should_classify_validation_errors() {
        let err = DeviceError::from(ValidationError::InvalidTime {
            input: "nope".to_string(),
        });
        assert!(err.is_validation());
        assert!(
            !DeviceError::Network("connection refused".to_string()).is_validation()
        );
    }

    #[test]
    fn should_passthrough_validation_message() {
        let err = DeviceError::from(ValidationError::InvalidNumber {
            field: "pump period",
            input: "abc".to_string(),
        });
        assert_eq!(err.to_string(), "invalid pump period: \"abc\"");
    }
}
