//! Reply builders shared by both translators.

use silc_bridge_proto::{Command, Message, Prefix, Response};

use crate::silc::SilcUser;

/// Numeric reply from the SILC server the session talks to.
pub fn server_reply(server_name: &str, response: Response, params: Vec<String>) -> Message {
    Message {
        prefix: Some(Prefix::ServerName(server_name.to_string())),
        command: Command::Response(response, params),
    }
}

/// `nick!user@host` prefix for a SILC user.
pub fn user_prefix(user: &SilcUser) -> Prefix {
    Prefix::Nickname(
        user.nickname.clone(),
        user.username.clone(),
        user.hostname.clone(),
    )
}

/// Attribute a message to a SILC user.
pub fn from_user(user: &SilcUser, message: Message) -> Message {
    message.with_prefix(user_prefix(user))
}
