//! Custom error types for the uff-reader crate.

use thiserror::Error;

use super::models::FloatFormat;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum UffError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A 58b number line declared a header record count other than 11.
    #[error("unexpected header record count in 58b number line: expected 11, found {0}")]
    UnexpectedHeaderRecordCount(i64),

    /// The source ended before a declared binary payload was complete.
    #[error("stream ended before binary payload was complete: needed {needed} bytes, got {got}")]
    TruncatedPayload { needed: usize, got: usize },

    /// A 58b block declared a floating-point encoding other than IEEE 754.
    #[error("float format {0:?} is not supported yet; only IEEE 754 is")]
    UnsupportedFloatFormat(FloatFormat),

    /// The ordinate data type code of record 7 is not one of the four
    /// kinds a dataset 58 block can carry (2, 4, 5, 6).
    #[error("unsupported ordinate data type code: {0}")]
    UnsupportedDataKind(i64),

    /// Complex data with an explicit per-point abscissa has no defined
    /// layout in either variant.
    #[error("complex data with an uneven abscissa is not supported yet")]
    ComplexUnevenAbscissa,

    /// An uneven-abscissa data line is not a whole number of index/value
    /// fields.
    #[error("invalid data line length: {0} characters")]
    InvalidDataLineLength(usize),

    /// A binary payload is not a whole number of points.
    #[error("binary payload length {length} is not a multiple of the {point_width}-byte point layout")]
    InvalidBinaryLength { length: usize, point_width: usize },

    /// A fixed-width field did not parse as the expected number.
    #[error("invalid numeric field {text:?} at column {column} (width {width})")]
    InvalidNumericField {
        text: String,
        column: usize,
        width: usize,
    },

    /// A record line ended before a required field.
    #[error("record line too short: expected at least {min_len} characters, found {len}")]
    LineTooShort { min_len: usize, len: usize },

    /// The requested text encoding is unknown or not single-byte.
    #[error("unsupported text encoding {0:?}: record columns require a single-byte encoding")]
    UnsupportedEncoding(String),

    /// The cancellation flag was raised while a read was in progress.
    #[error("read cancelled")]
    Cancelled,
}

/// A convenience `Result` type alias using the crate's `UffError` type.
pub type Result<T> = std::result::Result<T, UffError>;
