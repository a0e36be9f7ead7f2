use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotPositive { field: &'static str },
    InvalidDigits {
        field: &'static str,
        expected: usize,
        input: String,
    },
    InvalidFormat {
        field: &'static str,
        format: &'static str,
        input: String,
    },
    InvalidEmail { input: String },
    InvalidUrl { input: String },
    RetriesOutOfRange { min: u8, max: u8, actual: u8 },
    TooManyRecipients { max: usize, actual: usize },
    NothingToSend,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotPositive { field } => write!(f, "{field} must be a positive number"),
            Self::InvalidDigits {
                field,
                expected,
                input,
            } => write!(f, "{field} must be exactly {expected} digits, got {input:?}"),
            Self::InvalidFormat {
                field,
                format,
                input,
            } => write!(f, "{field} must use the {format} format, got {input:?}"),
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidUrl { input } => write!(f, "invalid URL: {input}"),
            Self::RetriesOutOfRange { min, max, actual } => {
                write!(f, "retries out of range: {actual} (expected {min}..={max})")
            }
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::NothingToSend => write!(f, "a fax needs at least one file or a cover page"),
        }
    }
}

impl std::error::Error for ValidationError {}
