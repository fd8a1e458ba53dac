//! Error types and result alias for the crate.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A spatial range, step or velocity range that cannot be sampled
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// The batch has no spread to normalize against
    #[error("degenerate range: {0}")]
    DegenerateRange(String),

    #[error("cannot normalize an empty batch")]
    EmptyBatch,

    #[error("malformed serial frame: {0}")]
    MalformedFrame(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "port closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "port closed");
    }

    #[test]
    fn messages_carry_context() {
        let err = Error::InvalidBounds("x: min 3 > max 1".into());
        assert_eq!(err.to_string(), "invalid bounds: x: min 3 > max 1");
    }
}
