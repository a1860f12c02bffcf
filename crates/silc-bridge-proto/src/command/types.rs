//! IRC command types.
//!
//! Typed variants exist for every verb the bridge translates or synthesizes.
//! Anything else is kept as [`Command::Raw`] so a host framework can still
//! hand it over and have it logged.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol

use crate::error::MessageParseError;
use crate::response::Response;

/// IRC command with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `PRIVMSG target text`
    PRIVMSG(String, String),
    /// `NOTICE target text`
    NOTICE(String, String),
    /// `JOIN channels [keys]`
    JOIN(String, Option<String>),
    /// `PART channels [message]`
    PART(String, Option<String>),
    /// `NICK nickname`
    NICK(String),
    /// `USER username mode realname`
    USER(String, String, String),
    /// `PING server1 [server2]`
    PING(String, Option<String>),
    /// `PONG server1 [server2]`
    PONG(String, Option<String>),
    /// `QUIT [message]`
    QUIT(Option<String>),
    /// `MODE target [modes and arguments]`
    MODE(String, Vec<String>),
    /// `WHO [mask]`
    WHO(Option<String>),
    /// `TOPIC channel [topic]`
    TOPIC(String, Option<String>),
    /// `NAMES [channels]`
    NAMES(Option<String>),
    /// `KICK channel user [comment]`
    KICK(String, String, Option<String>),
    /// Numeric reply with its parameters (target first).
    Response(Response, Vec<String>),
    /// Any other verb, kept verbatim.
    Raw(String, Vec<String>),
}

fn require(command: &str, args: &[&str], expected: usize) -> Result<(), MessageParseError> {
    if args.len() < expected {
        return Err(MessageParseError::NotEnoughArguments {
            command: command.to_owned(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn owned(args: &[&str], index: usize) -> Option<String> {
    args.get(index).map(|s| (*s).to_owned())
}

impl Command {
    /// Build a command from a verb and its raw parameters.
    ///
    /// Verbs are matched case-insensitively. Known verbs with too few
    /// parameters are rejected; unknown verbs become [`Command::Raw`].
    pub fn new(cmd: &str, args: Vec<&str>) -> Result<Command, MessageParseError> {
        if cmd.is_empty() {
            return Err(MessageParseError::InvalidCommand(cmd.to_owned()));
        }

        if cmd.len() == 3 && cmd.bytes().all(|b| b.is_ascii_digit()) {
            let code: u16 = cmd
                .parse()
                .map_err(|_| MessageParseError::InvalidCommand(cmd.to_owned()))?;
            let params = args.iter().map(|s| (*s).to_owned()).collect();
            return Ok(match Response::from_code(code) {
                Some(resp) => Command::Response(resp, params),
                None => Command::Raw(cmd.to_owned(), params),
            });
        }

        let verb = cmd.to_ascii_uppercase();
        let command = match verb.as_str() {
            "PRIVMSG" => {
                require(&verb, &args, 2)?;
                Command::PRIVMSG(args[0].to_owned(), args[1].to_owned())
            }
            "NOTICE" => {
                require(&verb, &args, 2)?;
                Command::NOTICE(args[0].to_owned(), args[1].to_owned())
            }
            "JOIN" => {
                require(&verb, &args, 1)?;
                Command::JOIN(args[0].to_owned(), owned(&args, 1))
            }
            "PART" => {
                require(&verb, &args, 1)?;
                Command::PART(args[0].to_owned(), owned(&args, 1))
            }
            "NICK" => {
                require(&verb, &args, 1)?;
                Command::NICK(args[0].to_owned())
            }
            "USER" => {
                require(&verb, &args, 4)?;
                Command::USER(args[0].to_owned(), args[1].to_owned(), args[3].to_owned())
            }
            "PING" => {
                require(&verb, &args, 1)?;
                Command::PING(args[0].to_owned(), owned(&args, 1))
            }
            "PONG" => {
                require(&verb, &args, 1)?;
                Command::PONG(args[0].to_owned(), owned(&args, 1))
            }
            "QUIT" => Command::QUIT(owned(&args, 0)),
            "MODE" => {
                require(&verb, &args, 1)?;
                Command::MODE(
                    args[0].to_owned(),
                    args[1..].iter().map(|s| (*s).to_owned()).collect(),
                )
            }
            "WHO" => Command::WHO(owned(&args, 0)),
            "TOPIC" => {
                require(&verb, &args, 1)?;
                Command::TOPIC(args[0].to_owned(), owned(&args, 1))
            }
            "NAMES" => Command::NAMES(owned(&args, 0)),
            "KICK" => {
                require(&verb, &args, 2)?;
                Command::KICK(args[0].to_owned(), args[1].to_owned(), owned(&args, 2))
            }
            _ => Command::Raw(verb, args.iter().map(|s| (*s).to_owned()).collect()),
        };
        Ok(command)
    }

    /// The verb this command is sent as (numerics as three digits).
    pub fn verb(&self) -> String {
        match self {
            Command::PRIVMSG(..) => "PRIVMSG".into(),
            Command::NOTICE(..) => "NOTICE".into(),
            Command::JOIN(..) => "JOIN".into(),
            Command::PART(..) => "PART".into(),
            Command::NICK(..) => "NICK".into(),
            Command::USER(..) => "USER".into(),
            Command::PING(..) => "PING".into(),
            Command::PONG(..) => "PONG".into(),
            Command::QUIT(..) => "QUIT".into(),
            Command::MODE(..) => "MODE".into(),
            Command::WHO(..) => "WHO".into(),
            Command::TOPIC(..) => "TOPIC".into(),
            Command::NAMES(..) => "NAMES".into(),
            Command::KICK(..) => "KICK".into(),
            Command::Response(resp, _) => resp.to_string(),
            Command::Raw(verb, _) => verb.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_verbs_are_case_insensitive() {
        let cmd = Command::new("privmsg", vec!["#bot", "hi"]).unwrap();
        assert_eq!(cmd, Command::PRIVMSG("#bot".into(), "hi".into()));
    }

    #[test]
    fn test_not_enough_arguments() {
        let err = Command::new("PRIVMSG", vec!["#bot"]).unwrap_err();
        assert_eq!(
            err,
            MessageParseError::NotEnoughArguments {
                command: "PRIVMSG".into(),
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_user_keeps_realname() {
        let cmd = Command::new("USER", vec!["bot", "0", "*", "Bridge Bot"]).unwrap();
        assert_eq!(
            cmd,
            Command::USER("bot".into(), "0".into(), "Bridge Bot".into())
        );
    }

    #[test]
    fn test_optional_arguments() {
        assert_eq!(Command::new("QUIT", vec![]).unwrap(), Command::QUIT(None));
        assert_eq!(Command::new("WHO", vec![]).unwrap(), Command::WHO(None));
        assert_eq!(
            Command::new("TOPIC", vec!["#bot"]).unwrap(),
            Command::TOPIC("#bot".into(), None)
        );
    }

    #[test]
    fn test_numerics() {
        let cmd = Command::new("353", vec!["me", "@", "#bot", "alice bob"]).unwrap();
        assert!(matches!(cmd, Command::Response(Response::RPL_NAMREPLY, ref p) if p.len() == 4));

        let raw = Command::new("999", vec!["x"]).unwrap();
        assert_eq!(raw, Command::Raw("999".into(), vec!["x".into()]));
    }

    #[test]
    fn test_unknown_verb_is_raw() {
        let cmd = Command::new("whois", vec!["alice"]).unwrap();
        assert_eq!(cmd, Command::Raw("WHOIS".into(), vec!["alice".into()]));
        assert_eq!(cmd.verb(), "WHOIS");
    }
}
