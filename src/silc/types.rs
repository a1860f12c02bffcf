//! SILC identity records as the bridge sees them.
//!
//! The transport hands these over with every event. Handles are opaque:
//! the bridge only stores them and passes them back to the session when it
//! needs to address a user or channel.

use std::fmt;

use bytes::Bytes;

/// Opaque SILC client ID (the remote identity handle of a user).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClientId(Bytes);

impl ClientId {
    pub fn new(raw: impl Into<Bytes>) -> Self {
        Self(raw.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Opaque SILC channel ID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelId(Bytes);

impl ChannelId {
    pub fn new(raw: impl Into<Bytes>) -> Self {
        Self(raw.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A remote SILC user.
///
/// `nickname` is the cache key, but SILC does not keep nicknames unique the
/// way IRC does. Two users sharing a nickname overwrite each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SilcUser {
    pub nickname: String,
    pub username: String,
    pub realname: String,
    pub hostname: String,
    pub server: Option<String>,
    pub mode: u32,
    pub id: ClientId,
}

impl SilcUser {
    pub fn new(
        nickname: impl Into<String>,
        username: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            username: username.into(),
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_realname(mut self, realname: impl Into<String>) -> Self {
        self.realname = realname.into();
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for SilcUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}@{}", self.nickname, self.username, self.hostname)
    }
}

/// A SILC channel. `channel_name` never carries an IRC sigil.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SilcChannel {
    pub channel_name: String,
    pub topic: String,
    pub mode: ChannelModes,
    pub user_limit: u32,
    pub id: ChannelId,
}

impl SilcChannel {
    pub fn new(channel_name: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ChannelModes) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: ChannelId) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for SilcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.channel_name)
    }
}

/// SILC channel mode bitmask (`SILC_CHANNEL_MODE_*`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelModes(u32);

impl ChannelModes {
    pub const PRIVATE: u32 = 0x0001;
    pub const SECRET: u32 = 0x0002;
    pub const PRIVKEY: u32 = 0x0004;
    pub const INVITE: u32 = 0x0008;
    pub const TOPIC: u32 = 0x0010;
    pub const ULIMIT: u32 = 0x0020;
    pub const PASSPHRASE: u32 = 0x0040;
    pub const CIPHER: u32 = 0x0080;
    pub const HMAC: u32 = 0x0100;
    pub const FOUNDER_AUTH: u32 = 0x0200;
    pub const SILENCE_USERS: u32 = 0x0400;
    pub const SILENCE_OPERS: u32 = 0x0800;
    pub const CHANNEL_AUTH: u32 = 0x1000;

    /// SILC bits that have an IRC channel mode letter, in emission order.
    const IRC_LETTERS: [(u32, char); 7] = [
        (Self::PRIVATE, 'p'),
        (Self::SECRET, 's'),
        (Self::INVITE, 'i'),
        (Self::TOPIC, 't'),
        (Self::ULIMIT, 'l'),
        (Self::PASSPHRASE, 'k'),
        (Self::SILENCE_USERS, 'm'),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    /// IRC mode string for this mask.
    ///
    /// `n` is always present: SILC only delivers channel messages from
    /// joined members. Bits with no IRC counterpart (cipher, hmac, keys,
    /// auth) are left out.
    pub fn to_irc_modes(self) -> String {
        let mut modes = String::from("+n");
        for (bit, letter) in Self::IRC_LETTERS {
            if self.contains(bit) {
                modes.push(letter);
            }
        }
        modes
    }
}

impl From<u32> for ChannelModes {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
