//! Message parsing implementation.
//!
//! `FromStr` for [`Message`] built on a small nom grammar:
//!
//! ```text
//! [:prefix] <command> [params...] [:trailing]
//! ```

use std::str::FromStr;

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::opt,
    error::ErrorKind,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use crate::error::{MessageParseError, ProtocolError};

use super::types::Message;

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command name (1*letter or 3digit).
fn parse_command(input: &str) -> IResult<&str, &str> {
    let (rest, cmd) = take_while1(|c: char| c.is_ascii_alphanumeric())(input)?;

    let is_all_letters = cmd.chars().all(|c| c.is_ascii_alphabetic());
    let is_three_digits = cmd.len() == 3 && cmd.chars().all(|c| c.is_ascii_digit());

    if is_all_letters || is_three_digits {
        Ok((rest, cmd))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::AlphaNumeric,
        )))
    }
}

/// Split the parameter list, honouring the `:trailing` form.
///
/// Runs of spaces count as one separator. At most 15 parameters are kept.
fn parse_params(input: &str) -> SmallVec<[&str; 15]> {
    let mut params: SmallVec<[&str; 15]> = SmallVec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() || params.len() >= 15 {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    params
}

fn parse_line(input: &str) -> IResult<&str, (Option<&str>, &str)> {
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (rest, command) = parse_command(input)?;
    Ok((rest, (prefix, command)))
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        let line = s.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause: MessageParseError::EmptyMessage,
            });
        }

        let (rest, (prefix, command)) = parse_line(line).map_err(|err| {
            let position = match &err {
                nom::Err::Error(e) | nom::Err::Failure(e) => line.len() - e.input.len(),
                nom::Err::Incomplete(_) => line.len(),
            };
            ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause: MessageParseError::ParseContext {
                    position,
                    context: format!("{:?}", err),
                },
            }
        })?;

        if !rest.is_empty() && !rest.starts_with(' ') {
            return Err(ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause: MessageParseError::InvalidCommand(format!("{}{}", command, rest)),
            });
        }

        let params = parse_params(rest);
        Message::new(prefix, command, params.to_vec()).map_err(|cause| {
            ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::prefix::Prefix;
    use crate::response::Response;

    #[test]
    fn test_parse_simple_ping() {
        let msg: Message = "PING :server\r\n".parse().unwrap();
        assert_eq!(msg.command, Command::PING("server".into(), None));
        assert!(msg.prefix.is_none());
    }

    #[test]
    fn test_parse_prefixed_privmsg() {
        let msg: Message = ":alice!a@host PRIVMSG #bot :hello there".parse().unwrap();
        assert_eq!(msg.prefix, Some(Prefix::new("alice", "a", "host")));
        assert_eq!(
            msg.command,
            Command::PRIVMSG("#bot".into(), "hello there".into())
        );
    }

    #[test]
    fn test_parse_collapses_spaces() {
        let msg: Message = "JOIN   #bot".parse().unwrap();
        assert_eq!(msg.command, Command::JOIN("#bot".into(), None));
    }

    #[test]
    fn test_parse_empty_trailing() {
        let msg: Message = ":a!b@c PART #bot :".parse().unwrap();
        assert_eq!(msg.command, Command::PART("#bot".into(), Some(String::new())));
    }

    #[test]
    fn test_parse_numeric() {
        let msg: Message = ":silc.example.com 366 me #bot :End of /NAMES list"
            .parse()
            .unwrap();
        assert_eq!(msg.response(), Some(Response::RPL_ENDOFNAMES));
        assert_eq!(msg.prefix, Some(Prefix::server("silc.example.com")));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = "\r\n".parse::<Message>().unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::InvalidMessage {
                cause: MessageParseError::EmptyMessage,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_command() {
        assert!("PRIV-MSG #bot :x".parse::<Message>().is_err());
        assert!("12 x".parse::<Message>().is_err());
    }

    #[test]
    fn test_serialized_lines_parse_back() {
        let original = Message::part_with_message("#bot", "")
            .with_prefix(Prefix::new("alice", "a", "host"));
        let parsed: Message = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }
}
