use crate::command::Command;
use crate::error::MessageParseError;
use crate::prefix::Prefix;
use crate::response::Response;

/// An owned IRC message: optional source prefix plus the command.
///
/// # Example
///
/// ```
/// use silc_bridge_proto::{Message, Prefix};
///
/// let msg: Message = ":alice!a@host PRIVMSG #bot :Hello!".parse().unwrap();
/// assert_eq!(msg.source_nickname(), Some("alice"));
///
/// let reply = Message::pong("silc.example.com", "token")
///     .with_prefix(Prefix::server("silc.example.com"));
/// assert_eq!(
///     reply.to_string(),
///     ":silc.example.com PONG silc.example.com :token\r\n"
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Message prefix/source (e.g., `nick!user@host`).
    pub prefix: Option<Prefix>,
    /// The IRC command and its parameters.
    pub command: Command,
}

impl Message {
    /// Create a new message from raw components.
    #[must_use = "message creation result should be handled"]
    pub fn new(
        prefix: Option<&str>,
        command: &str,
        args: Vec<&str>,
    ) -> Result<Message, MessageParseError> {
        Ok(Message {
            prefix: prefix.map(Prefix::new_from_str),
            command: Command::new(command, args)?,
        })
    }

    /// Replace the prefix of this message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }

    /// Numeric code of this message, if it is a known reply.
    pub fn response(&self) -> Option<Response> {
        match self.command {
            Command::Response(resp, _) => Some(resp),
            _ => None,
        }
    }

    /// Create a PRIVMSG message to a target with text
    #[must_use]
    pub fn privmsg<T, M>(target: T, text: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Command::PRIVMSG(target.into(), text.into()).into()
    }

    /// Create a JOIN message for a channel
    #[must_use]
    pub fn join<C>(channel: C) -> Self
    where
        C: Into<String>,
    {
        Command::JOIN(channel.into(), None).into()
    }

    /// Create a PART message with a (possibly empty) reason
    #[must_use]
    pub fn part_with_message<C, M>(channel: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Command::PART(channel.into(), Some(message.into())).into()
    }

    /// Create a QUIT message with a (possibly empty) reason
    #[must_use]
    pub fn quit_with_message<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Command::QUIT(Some(message.into())).into()
    }

    /// Create a NICK message to change nickname
    #[must_use]
    pub fn nick<N>(nickname: N) -> Self
    where
        N: Into<String>,
    {
        Command::NICK(nickname.into()).into()
    }

    /// Create a TOPIC message setting a channel topic
    #[must_use]
    pub fn topic<C, T>(channel: C, topic: T) -> Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        Command::TOPIC(channel.into(), Some(topic.into())).into()
    }

    /// Create a KICK message without a comment
    #[must_use]
    pub fn kick<C, N>(channel: C, nickname: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        Command::KICK(channel.into(), nickname.into(), None).into()
    }

    /// Create a MODE message for a target
    #[must_use]
    pub fn mode<T, M>(target: T, modes: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Command::MODE(target.into(), vec![modes.into()]).into()
    }

    /// Create a PING message
    #[must_use]
    pub fn ping<S>(server: S) -> Self
    where
        S: Into<String>,
    {
        Command::PING(server.into(), None).into()
    }

    /// Create a PONG message echoing a token
    #[must_use]
    pub fn pong<S, T>(server: S, token: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Command::PONG(server.into(), Some(token.into())).into()
    }
}

impl From<Command> for Message {
    fn from(cmd: Command) -> Message {
        Message {
            prefix: None,
            command: cmd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_prefix_and_command() {
        let msg = Message::new(Some("alice!a@h"), "JOIN", vec!["#bot"]).unwrap();
        assert_eq!(msg.source_nickname(), Some("alice"));
        assert_eq!(msg.command, Command::JOIN("#bot".into(), None));
    }

    #[test]
    fn test_response_accessor() {
        let msg: Message = Command::Response(Response::RPL_WELCOME, vec!["me".into()]).into();
        assert_eq!(msg.response(), Some(Response::RPL_WELCOME));
        assert_eq!(Message::ping("x").response(), None);
    }
}
