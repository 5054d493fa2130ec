//! Errors raised while reading or writing the wire format.

use thiserror::Error;

/// Fatal protocol failures. The connection cannot continue after any of these.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream ended in the middle of a message")]
    Truncated,

    #[error("unexpected tag {tag} for {message}")]
    UnexpectedTag { message: &'static str, tag: i32 },

    #[error("invalid boolean byte {0:#04x}")]
    InvalidBool(u8),

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("negative length prefix {0}")]
    NegativeLength(i32),

    #[error("length {0} does not fit the i32 length prefix")]
    LengthOverflow(usize),
}

impl ProtocolError {
    /// Maps an I/O error, turning an early end of stream into [`ProtocolError::Truncated`].
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::Truncated
        } else {
            Self::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
