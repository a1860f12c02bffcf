//! Identity cache: nickname → user, channel name → channel.
//!
//! Refreshed from every event that mentions a user or channel. Entries are
//! overwritten, never removed, and the maps are not size-bounded. One cache
//! belongs to exactly one driver and is only touched from its tick.

use std::collections::HashMap;

use crate::silc::{SilcChannel, SilcUser};

#[derive(Debug, Default)]
pub struct IdentityCache {
    users: HashMap<String, SilcUser>,
    channels: HashMap<String, SilcChannel>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by nickname.
    pub fn put_user(&mut self, user: &SilcUser) {
        self.users.insert(user.nickname.clone(), user.clone());
    }

    /// Insert or overwrite by channel name (no sigil).
    pub fn put_channel(&mut self, channel: &SilcChannel) {
        self.channels
            .insert(channel.channel_name.clone(), channel.clone());
    }

    pub fn lookup_user(&self, nickname: &str) -> Option<&SilcUser> {
        self.users.get(nickname)
    }

    pub fn lookup_channel(&self, name: &str) -> Option<&SilcChannel> {
        self.channels.get(name)
    }

    /// Number of cached users and channels.
    pub fn len(&self) -> (usize, usize) {
        (self.users.len(), self.channels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.channels.is_empty()
    }
}
