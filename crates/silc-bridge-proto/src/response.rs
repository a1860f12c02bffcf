//! IRC numeric response codes emulated by the bridge.
//!
//! Only the numerics the bridge synthesizes (or has to recognise when a host
//! framework echoes them back) are listed. Unknown numerics parse into
//! [`crate::Command::Raw`].
//!
//! # Reference
//! - RFC 2812 Section 5: Replies

#![allow(non_camel_case_types)]

use std::fmt::{self, Display, Formatter};

/// IRC server response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 315 - End of WHO list
    RPL_ENDOFWHO = 315,
    /// 324 - Channel mode is
    RPL_CHANNELMODEIS = 324,
    /// 329 - Channel creation time
    RPL_CREATIONTIME = 329,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 366 - End of NAMES list
    RPL_ENDOFNAMES = 366,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
}

impl Response {
    /// The numeric value of this response.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a response by numeric value.
    pub fn from_code(code: u16) -> Option<Response> {
        Some(match code {
            1 => Response::RPL_WELCOME,
            2 => Response::RPL_YOURHOST,
            315 => Response::RPL_ENDOFWHO,
            324 => Response::RPL_CHANNELMODEIS,
            329 => Response::RPL_CREATIONTIME,
            332 => Response::RPL_TOPIC,
            352 => Response::RPL_WHOREPLY,
            353 => Response::RPL_NAMREPLY,
            366 => Response::RPL_ENDOFNAMES,
            376 => Response::RPL_ENDOFMOTD,
            421 => Response::ERR_UNKNOWNCOMMAND,
            _ => return None,
        })
    }

    /// Whether this is an error numeric (400-599).
    pub fn is_error(self) -> bool {
        (400..600).contains(&self.code())
    }

    /// Whether the final parameter is free-form text.
    ///
    /// Mode strings and timestamps are plain tokens; every other numeric
    /// here ends in human readable text and is always written as trailing.
    pub fn has_trailing_text(self) -> bool {
        !matches!(self, Response::RPL_CHANNELMODEIS | Response::RPL_CREATIONTIME)
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
