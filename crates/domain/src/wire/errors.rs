use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Message truncated while reading {0}")]
    Truncated(&'static str),

    #[error("Invalid compression pointer offset {offset} (message length {len})")]
    InvalidPointerOffset { offset: usize, len: usize },

    #[error("Compression pointer chain exceeds {0} hops")]
    PointerLoop(usize),

    #[error("Unsupported label type 0x{0:02x}")]
    UnsupportedLabel(u8),

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Remaining {remaining} bytes reach the packet size limit of {limit}")]
    SizeLimitExceeded { remaining: usize, limit: usize },

    #[error("Buffer exhausted after {parsed} of {expected} questions")]
    QuestionsExhausted { parsed: usize, expected: usize },

    #[error("Offset {0} cannot be encoded as a compression pointer")]
    PointerOutOfRange(usize),
}
