//! Error types for the IRC line model.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// A line could not be turned into a [`crate::Message`].
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw line that failed to parse.
        string: String,
        /// The underlying parse failure.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors raised while building or parsing a message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line was empty (or only whitespace and line endings).
    #[error("empty message")]
    EmptyMessage,

    /// The command token was neither letters nor a three digit numeric.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A known command arrived with fewer parameters than it requires.
    #[error("not enough arguments for {command}: expected {expected}, got {got}")]
    NotEnoughArguments {
        /// The command verb.
        command: String,
        /// The minimum number of parameters.
        expected: usize,
        /// The number of parameters present.
        got: usize,
    },

    /// The nom parser rejected the line.
    #[error("parse error at byte {position}: {context}")]
    ParseContext {
        /// Byte offset where parsing stopped.
        position: usize,
        /// Human readable description.
        context: String,
    },
}
