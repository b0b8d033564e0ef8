//! Typed errors for the staking state machine.
//!
//! Mirrors the four error kinds a Platform VM distinguishes: malformed input
//! never reaches the mempool (syntactic), a well-formed tx that violates the
//! staker/UTXO bookkeeping is dropped (semantic), a storage or codec failure
//! is fatal to the process (state), and a malformed block from a peer is
//! rejected locally (protocol).
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntactic,
    Semantic,
    State,
    Protocol,
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("syntactic verify failed: {message}")]
    Syntactic { message: String },

    #[error("semantic verify failed: {message}")]
    Semantic { message: String },

    #[error("state error: {message}")]
    State { message: String },

    #[error("protocol error: {message}")]
    Protocol { message: String },
}

impl Error {
    pub fn syntactic(message: impl Into<String>) -> Self {
        Error::Syntactic {
            message: message.into(),
        }
    }

    pub fn semantic(message: impl Into<String>) -> Self {
        Error::Semantic {
            message: message.into(),
        }
    }

    pub fn state(message: impl Into<String>) -> Self {
        Error::State {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Syntactic { message }
            | Error::Semantic { message }
            | Error::State { message }
            | Error::Protocol { message } => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntactic { .. } => ErrorKind::Syntactic,
            Error::Semantic { .. } => ErrorKind::Semantic,
            Error::State { .. } => ErrorKind::State,
            Error::Protocol { .. } => ErrorKind::Protocol,
        }
    }

    /// Fatal errors must bring the node process down rather than be
    /// recovered from; everything else is a rejected tx/block.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::State { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::State {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_fatal() {
        assert_eq!(Error::syntactic("x").kind(), ErrorKind::Syntactic);
        assert!(!Error::syntactic("x").is_fatal());
        assert!(Error::state("x").is_fatal());
        assert_eq!(Error::state("x").message(), "x");
    }
}
