//! Channel name utilities.
//!
//! SILC channel names carry no sigil. IRC channel names do. The sigil is
//! added when a line is synthesized for IRC and stripped when an IRC command
//! is taken apart for SILC; nothing in between ever sees a `#`.

/// The sigil the bridge uses for every channel it exposes.
pub const CHANNEL_SIGIL: char = '#';

/// Extension trait for checking if a string is an IRC channel target.
pub trait ChannelExt {
    /// Check if this string names a channel.
    ///
    /// The bridge only ever hands out `#` channels, so that is the only
    /// sigil recognised. Space, comma, BEL and NUL are rejected.
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_name(&self) -> bool {
        let mut chars = self.chars();

        if chars.next() != Some(CHANNEL_SIGIL) {
            return false;
        }

        chars.all(|c| c != ' ' && c != ',' && c != '\x07' && c != '\0' && !c.is_control())
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}

/// Strip one leading `#` from an IRC channel target.
///
/// Targets without a sigil are returned unchanged.
pub fn strip_sigil(target: &str) -> &str {
    target.strip_prefix(CHANNEL_SIGIL).unwrap_or(target)
}

/// Prefix a SILC channel name with the IRC sigil.
pub fn with_sigil(channel_name: &str) -> String {
    let mut out = String::with_capacity(channel_name.len() + 1);
    out.push(CHANNEL_SIGIL);
    out.push_str(channel_name);
    out
}
