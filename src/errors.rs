//! Seqkit Error Handling
//!
//! Every fallible operation in the crate returns [`SeqResult`]. Errors carry a
//! stable `miette` diagnostic code and a help message so callers can render
//! them with [`print_error`] or fold them into their own `miette::Report` chain.

use miette::{Diagnostic, Report};
use thiserror::Error;

/// Convenient alias for results produced by this crate.
pub type SeqResult<T> = Result<T, SeqError>;

/// Type-safe error classification that corresponds to `SeqError` variants.
/// Tests match on this instead of on rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A reduction had nothing to start from
    EmptySequence,
    /// An input value had the wrong shape (e.g. a JSON array where an object was expected)
    TypeError,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::EmptySequence => "EmptySequence",
            ErrorType::TypeError => "TypeError",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for all seqkit failure modes.
#[derive(Debug, Error, Diagnostic)]
pub enum SeqError {
    #[error("Empty sequence: cannot {operation} a sequence with no elements and no initial value")]
    #[diagnostic(
        code(seqkit::sequence::empty),
        help("pass an initial accumulator, or check that the sequence is non-empty first")
    )]
    EmptySequence { operation: &'static str },

    #[error("Type error: expected {expected}, got {actual}")]
    #[diagnostic(code(seqkit::types::mismatch))]
    TypeMismatch {
        expected: String,
        actual: String,
        #[help]
        help: Option<String>,
    },
}

impl SeqError {
    /// Builds the error raised when a fold has neither elements nor an initial value.
    pub fn empty_sequence(operation: &'static str) -> Self {
        SeqError::EmptySequence { operation }
    }

    /// Builds a type mismatch error with an optional help message.
    pub fn type_mismatch(
        expected: impl Into<String>,
        actual: impl Into<String>,
        help: Option<String>,
    ) -> Self {
        SeqError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
            help,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            SeqError::EmptySequence { .. } => ErrorType::EmptySequence,
            SeqError::TypeMismatch { .. } => ErrorType::TypeError,
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Wraps a `SeqError` in a `miette::Report` for rich rendering or chaining.
pub fn to_report(error: SeqError) -> Report {
    Report::new(error)
}

/// Prints a SeqError with full miette diagnostics to stderr.
pub fn print_error(error: SeqError) {
    let report = to_report(error);
    eprintln!("{report:?}");
}
