//! Unified error handling for the bridge.
//!
//! Errors are split by who can recover from them: session faults go back to
//! the host framework's top-level loop, everything the translators can
//! absorb locally never becomes an error at all (see
//! [`crate::bridge::Outcome`]).

use silc_bridge_proto::{Command, Message, Prefix, Response};
use thiserror::Error;

use crate::config::ConfigError;

// ============================================================================
// Session Errors (SILC client)
// ============================================================================

/// Failures reported by a [`crate::silc::SilcSession`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to connect to {host}:{port}: {reason}")]
    ConnectFailed {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("session is not connected")]
    NotConnected,

    #[error("send failed: {0}")]
    SendFailed(String),

    #[error("event processing failed: {0}")]
    Processing(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectFailed { .. } => "connect_failed",
            Self::NotConnected => "not_connected",
            Self::SendFailed(_) => "send_failed",
            Self::Processing(_) => "processing",
            Self::Io(_) => "io",
        }
    }
}

// ============================================================================
// Bridge Errors (driver)
// ============================================================================

/// Errors surfaced by the bridge driver to its host framework.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("session fault: {0}")]
    Session(#[from] SessionError),

    #[error("no server available to connect to")]
    NoServerAvailable,

    #[error("bridge has been stopped")]
    Stopped,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BridgeError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Session(e) => e.error_code(),
            Self::NoServerAvailable => "no_server_available",
            Self::Stopped => "stopped",
            Self::UnknownCommand(_) => "unknown_command",
            Self::Config(_) => "config",
        }
    }

    /// Whether the host framework can keep the process running after this.
    ///
    /// Session faults end the tick, not the process; the host decides
    /// whether to reconnect.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Stopped | Self::Config(_))
    }

    /// Convert to an IRC error reply message.
    ///
    /// Returns `None` for errors that don't warrant a reply to the host.
    pub fn to_irc_reply(&self, server_name: &str, nick: &str) -> Option<Message> {
        let command = match self {
            Self::UnknownCommand(cmd) => Command::Response(
                Response::ERR_UNKNOWNCOMMAND,
                vec![nick.to_string(), cmd.clone(), "Unknown command".to_string()],
            ),
            Self::Session(_) | Self::NoServerAvailable | Self::Stopped | Self::Config(_) => {
                return None;
            }
        };

        Some(Message {
            prefix: Some(Prefix::ServerName(server_name.to_string())),
            command,
        })
    }
}

/// Result type for driver operations.
pub type BridgeResult<T = ()> = Result<T, BridgeError>;
