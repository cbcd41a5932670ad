use thiserror::Error;

/// Represents an error when filling or reading a firmware table record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareTableError {
    #[error("the buffer is not large enough ({capacity} bytes, {required} required)")]
    InsufficientBuffer { required: usize, capacity: usize },

    #[error("invalid hexadecimal pair at offset {offset} of the table source")]
    InvalidHex { offset: usize },

    #[error("the record is truncated ({len} bytes)")]
    Truncated { len: usize },

    #[error("the record declares {declared} bytes of table data but only {available} are present")]
    LengthMismatch { declared: u32, available: usize },

    #[error("the table data is too large ({len} bytes)")]
    PayloadTooLarge { len: usize },
}
