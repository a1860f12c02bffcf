//! IRC commands from the host framework → SILC calls.
//!
//! Channel targets arrive with a `#` and leave without one. Names are
//! resolved to SILC handles through the [`IdentityCache`]; a miss drops the
//! command instead of failing the tick.

use silc_bridge_proto::{ChannelExt, Command, Message, Response, strip_sigil};
use tracing::{debug, info, warn};

use super::cache::IdentityCache;
use super::helpers::server_reply;
use crate::config::IdentityConfig;
use crate::error::{BridgeError, SessionError};
use crate::silc::SilcSession;

/// Why a command was dropped without reaching the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// `#channel` target that no event has told us about.
    UnknownChannel(String),
    /// Nickname target that no event has told us about.
    UnknownUser(String),
}

/// What became of one host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one session call was made.
    Forwarded,
    /// Answered locally with emulated replies; no session call.
    Answered,
    /// Not forwarded because a name could not be resolved.
    Dropped { reason: DropReason },
    /// Understood and deliberately not acted on.
    Ignored,
    /// No SILC counterpart.
    Unsupported,
}

/// Result of dispatching one host command.
#[derive(Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub outcome: Outcome,
    /// Lines to hand back to the host framework.
    pub replies: Vec<Message>,
}

impl Dispatch {
    fn forwarded() -> Self {
        Self::with(Outcome::Forwarded)
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            replies: Vec::new(),
        }
    }
}

/// Converts host IRC commands into SILC session calls.
#[derive(Debug, Clone)]
pub struct OutboundTranslator {
    identity: IdentityConfig,
}

impl OutboundTranslator {
    pub fn new(identity: IdentityConfig) -> Self {
        Self { identity }
    }

    /// Dispatch one command. Only session faults are errors.
    ///
    /// `last_ping` receives the token of a PING so the PONG built from the
    /// SILC ping reply can echo it.
    pub fn dispatch<S: SilcSession>(
        &self,
        msg: &Message,
        cache: &IdentityCache,
        session: &mut S,
        last_ping: &mut String,
    ) -> Result<Dispatch, SessionError> {
        debug!(command = %msg.command.verb(), "host command");
        match &msg.command {
            Command::PRIVMSG(target, text) => self.privmsg(target, text, cache, session),
            Command::JOIN(channels, _) => {
                for name in channels.split(',').filter(|c| !c.is_empty()) {
                    session.command_call(&format!("JOIN {}", strip_sigil(name)))?;
                }
                Ok(Dispatch::forwarded())
            }
            Command::PART(channels, _) => {
                for name in channels.split(',').filter(|c| !c.is_empty()) {
                    session.command_call(&format!("LEAVE {}", strip_sigil(name)))?;
                }
                Ok(Dispatch::forwarded())
            }
            Command::NICK(nick) => {
                session.command_call(&format!("NICK {nick}"))?;
                let host = session.remote_host();
                Ok(Dispatch {
                    outcome: Outcome::Forwarded,
                    replies: vec![self.emulated(&host, Response::RPL_WELCOME, "Welcome")],
                })
            }
            Command::PING(token, _) => {
                last_ping.clone_from(token);
                let host = session.remote_host();
                session.command_call(&format!("PING {host}"))?;
                Ok(Dispatch::forwarded())
            }
            Command::USER(..) => {
                let host = session.remote_host();
                Ok(Dispatch {
                    outcome: Outcome::Answered,
                    replies: vec![
                        self.emulated(&host, Response::RPL_YOURHOST, "Your host"),
                        self.emulated(&host, Response::RPL_ENDOFMOTD, "End MOTD"),
                    ],
                })
            }
            Command::MODE(..) => Ok(Dispatch::with(Outcome::Ignored)),
            Command::WHO(Some(mask)) if mask.is_channel_name() => {
                session.command_call(&format!("USERS {}", strip_sigil(mask)))?;
                Ok(Dispatch::forwarded())
            }
            Command::WHO(_) => {
                warn!(command = ?msg.command, "WHO only supported for channels");
                let host = session.remote_host();
                Ok(Dispatch {
                    outcome: Outcome::Unsupported,
                    replies: BridgeError::UnknownCommand("WHO".to_string())
                        .to_irc_reply(&host, &self.identity.username)
                        .into_iter()
                        .collect(),
                })
            }
            Command::TOPIC(channel, topic) => {
                let line = match topic {
                    Some(topic) => format!("TOPIC {} {}", strip_sigil(channel), topic),
                    None => format!("TOPIC {}", strip_sigil(channel)),
                };
                session.command_call(&line)?;
                Ok(Dispatch::forwarded())
            }
            Command::QUIT(reason) => {
                let line = match reason {
                    Some(reason) => format!("QUIT {reason}"),
                    None => "QUIT".to_string(),
                };
                session.command_call(&line)?;
                Ok(Dispatch::forwarded())
            }
            Command::NAMES(Some(channel)) => {
                session.command_call(&format!("USERS {}", strip_sigil(channel)))?;
                Ok(Dispatch::forwarded())
            }
            Command::NAMES(None) => {
                warn!("NAMES without a channel is not supported");
                Ok(Dispatch::with(Outcome::Unsupported))
            }
            Command::NOTICE(..)
            | Command::PONG(..)
            | Command::KICK(..)
            | Command::Response(..)
            | Command::Raw(..) => {
                warn!(command = %msg.command.verb(), "unsupported host command");
                Ok(Dispatch::with(Outcome::Unsupported))
            }
        }
    }

    fn privmsg<S: SilcSession>(
        &self,
        target: &str,
        text: &str,
        cache: &IdentityCache,
        session: &mut S,
    ) -> Result<Dispatch, SessionError> {
        if target.is_channel_name() {
            let name = strip_sigil(target);
            match cache.lookup_channel(name) {
                Some(channel) => {
                    session.send_channel_message(channel, text)?;
                    Ok(Dispatch::forwarded())
                }
                None => {
                    warn!(channel = %name, "PRIVMSG to unknown channel dropped");
                    Ok(Dispatch::with(Outcome::Dropped {
                        reason: DropReason::UnknownChannel(name.to_string()),
                    }))
                }
            }
        } else {
            match cache.lookup_user(target) {
                Some(user) => {
                    session.send_private_message(user, text)?;
                    Ok(Dispatch::forwarded())
                }
                None => {
                    warn!(nick = %target, "PRIVMSG to unknown user dropped");
                    Ok(Dispatch::with(Outcome::Dropped {
                        reason: DropReason::UnknownUser(target.to_string()),
                    }))
                }
            }
        }
    }

    /// `:<host> <numeric> <username> :<text>`
    fn emulated(&self, host: &str, response: Response, text: &str) -> Message {
        info!(numeric = %response, "emulating registration reply");
        server_reply(
            host,
            response,
            vec![self.identity.username.clone(), text.to_string()],
        )
    }
}
