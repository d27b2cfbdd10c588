//! Error types for taskrender.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Assembly is all-or-nothing: any of these errors aborts the
//! operation with no partial render context returned.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for render-context assembly.
///
/// Each variant corresponds to one failure mode of a values source or the
/// invocation itself. None of these are retried; they all stem from invalid
/// local input, not transient conditions.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A base64 payload could not be decoded, or the decoded content is not
    /// a valid values document.
    #[error("failed to decode base64 payload: {0}")]
    Decode(String),

    /// A values-file path could not be read.
    #[error("failed to read values file '{path}': {reason}")]
    SourceRead { path: String, reason: String },

    /// A values document has invalid structure.
    #[error("failed to parse values document: {0}")]
    Parse(String),

    /// An inline `--set` segment lacks `=` or has an empty key.
    #[error("malformed --set entry '{0}': expected key=value")]
    MalformedSetEntry(String),

    /// User provided invalid arguments or an invalid invocation.
    #[error("{0}")]
    UserError(String),
}

impl RenderError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::UserError(_) => exit_codes::USER_ERROR,
            RenderError::Decode(_)
            | RenderError::SourceRead { .. }
            | RenderError::Parse(_)
            | RenderError::MalformedSetEntry(_) => exit_codes::ASSEMBLY_FAILURE,
        }
    }
}

/// Result type alias for taskrender operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_errors_share_an_exit_code() {
        let errs = [
            RenderError::Decode("bad padding".to_string()),
            RenderError::SourceRead {
                path: "values.yaml".to_string(),
                reason: "No such file or directory".to_string(),
            },
            RenderError::Parse("not a mapping".to_string()),
            RenderError::MalformedSetEntry("novalue".to_string()),
        ];
        for err in errs {
            assert_eq!(err.exit_code(), exit_codes::ASSEMBLY_FAILURE);
        }
    }

    #[test]
    fn user_error_has_user_exit_code() {
        let err = RenderError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = RenderError::MalformedSetEntry("novalue".to_string());
        assert_eq!(
            err.to_string(),
            "malformed --set entry 'novalue': expected key=value"
        );

        let err = RenderError::SourceRead {
            path: "missing.yaml".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("missing.yaml"));
    }
}
