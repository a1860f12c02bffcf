//! # silc-bridge-proto
//!
//! The IRC side of the SILC bridge: a small owned line model that the bridge
//! synthesizes for its host framework and parses back from it.
//!
//! ## Features
//!
//! - `Prefix` for `server.name` and `nick!user@host` sources
//! - Typed `Command` variants for the verbs the bridge understands, with a
//!   `Raw` fallback for everything else
//! - `Response` numerics for the replies the bridge emulates
//! - A nom based line parser and RFC 2812 style serialization
//! - Channel sigil helpers for the IRC/SILC naming boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use silc_bridge_proto::{Command, Message, Prefix};
//!
//! let msg = Message::privmsg("#bot", "hello there")
//!     .with_prefix(Prefix::new("alice", "alice", "silc.example.com"));
//! assert_eq!(
//!     msg.to_string(),
//!     ":alice!alice@silc.example.com PRIVMSG #bot :hello there\r\n"
//! );
//!
//! let parsed: Message = "PING :token123".parse().unwrap();
//! assert_eq!(parsed.command, Command::PING("token123".into(), None));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod command;
pub mod error;
pub mod message;
pub mod prefix;
pub mod response;

pub use self::chan::{strip_sigil, with_sigil, ChannelExt, CHANNEL_SIGIL};
pub use self::command::Command;
pub use self::error::{MessageParseError, ProtocolError};
pub use self::message::Message;
pub use self::prefix::Prefix;
pub use self::response::Response;
