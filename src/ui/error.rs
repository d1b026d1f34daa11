//! Error types for widget text buffers

use thiserror_no_std::Error;

/// Errors raised when text does not fit a widget's fixed-capacity buffer.
///
/// The buffer is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Typed or assigned text would overflow the field's text buffer
    #[error("Text capacity exceeded (max: {max})")]
    TextCapacityExceeded {
        /// Maximum number of bytes the buffer holds
        max: usize,
    },

    /// Label caption longer than the caption buffer
    #[error("Caption too long (max: {max})")]
    CaptionTooLong {
        /// Maximum number of bytes the caption holds
        max: usize,
    },
}

/// Result type for text field operations
pub type FieldResult<T> = Result<T, FieldError>;
