//! Everything a SILC client session can report back.
//!
//! The set is closed: one variant per client callback, grouped into
//! notifications (server-initiated) and command replies (answers to
//! something the bridge issued). The translator matches on it exhaustively.

use super::types::{ChannelModes, SilcChannel, SilcUser};

/// Who changed a channel topic.
///
/// SILC reports either a client or a channel/server identity as the
/// changer. The two cases produce different IRC prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopicChanger {
    ChangedByUser(SilcUser),
    ChangedByServer(SilcChannel),
}

/// One event pulled from a SILC session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SilcEvent {
    /// Key exchange and authentication finished; the session is live.
    Connected,
    Disconnected {
        message: String,
    },
    /// Raw status callback for an issued command.
    CommandStatus {
        success: bool,
        code: u32,
        command: String,
        status: u32,
    },
    /// Informational text from the client library itself.
    Say {
        message: String,
    },
    ChannelMessage {
        sender: SilcUser,
        channel: SilcChannel,
        flags: u32,
        message: String,
    },
    PrivateMessage {
        sender: SilcUser,
        flags: u32,
        message: String,
    },
    Notify(Notification),
    CommandReply(CommandReply),
    /// The server rejected a command the bridge issued.
    CommandFailed {
        command: String,
        command_line: String,
        error_code: u32,
        error_message: String,
    },
}

/// Server notifications (`SILC_NOTIFY_TYPE_*`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    None {
        message: String,
    },
    Invite {
        channel: SilcChannel,
        channel_name: String,
        inviter: SilcUser,
    },
    Join {
        joiner: SilcUser,
        channel: SilcChannel,
    },
    Leave {
        leaver: SilcUser,
        channel: SilcChannel,
    },
    Signoff {
        user: SilcUser,
        message: String,
    },
    TopicSet {
        changer: TopicChanger,
        channel: SilcChannel,
        topic: String,
    },
    NickChange {
        old: SilcUser,
        new: SilcUser,
    },
    ChannelModeChange {
        changer: Option<SilcUser>,
        mode: ChannelModes,
        cipher: Option<String>,
        hmac: Option<String>,
        channel: SilcChannel,
    },
    ChannelUserModeChange {
        changer: Option<SilcUser>,
        mode: u32,
        user: SilcUser,
        channel: SilcChannel,
    },
    Motd {
        message: String,
    },
    ServerSignoff,
    Kicked {
        kicked: SilcUser,
        reason: String,
        kicker: SilcUser,
        channel: SilcChannel,
    },
    Killed {
        killed: SilcUser,
        reason: String,
        killer: Option<SilcUser>,
        channel: Option<SilcChannel>,
    },
    Error {
        kind: u32,
        message: String,
    },
    Watch {
        watched: SilcUser,
        new_nick: Option<String>,
        user_mode: u32,
        notification: u32,
    },
}

/// One entry of a LIST reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub channel: SilcChannel,
    pub topic: String,
    pub user_count: u32,
}

/// Replies to commands issued through `command_call`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandReply {
    Whois {
        user: SilcUser,
        mode: u32,
        idle: u32,
    },
    Whowas {
        user: SilcUser,
    },
    Identify {
        user: Option<SilcUser>,
    },
    Nick {
        user: SilcUser,
        nickname: String,
    },
    /// `None` marks the end of the listing.
    List {
        entry: Option<ListEntry>,
    },
    Topic {
        channel: SilcChannel,
        topic: String,
    },
    Invite {
        channel: SilcChannel,
    },
    Kill {
        user: SilcUser,
    },
    Info {
        server_name: String,
        info: String,
    },
    Stats,
    Ping,
    Oper,
    Join {
        channel: SilcChannel,
        channel_name: String,
        topic: String,
        hmac_name: Option<String>,
        mode: ChannelModes,
        user_limit: u32,
        users: Vec<SilcUser>,
    },
    Motd {
        message: String,
    },
    ChannelMode {
        channel: SilcChannel,
        mode: ChannelModes,
        user_limit: u32,
    },
    ChannelUserMode {
        mode: u32,
        channel: SilcChannel,
        user: SilcUser,
    },
    Kick {
        channel: SilcChannel,
        user: SilcUser,
    },
    Ban {
        channel: SilcChannel,
    },
    Detach,
    Watch,
    SilcOper,
    Leave {
        channel: SilcChannel,
    },
    Users {
        channel: SilcChannel,
        users: Vec<SilcUser>,
    },
    Service,
}

impl SilcEvent {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SilcEvent::Connected => "connected",
            SilcEvent::Disconnected { .. } => "disconnected",
            SilcEvent::CommandStatus { .. } => "command_status",
            SilcEvent::Say { .. } => "say",
            SilcEvent::ChannelMessage { .. } => "channel_message",
            SilcEvent::PrivateMessage { .. } => "private_message",
            SilcEvent::Notify(n) => n.kind(),
            SilcEvent::CommandReply(r) => r.kind(),
            SilcEvent::CommandFailed { .. } => "command_failed",
        }
    }
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::None { .. } => "notify_none",
            Notification::Invite { .. } => "notify_invite",
            Notification::Join { .. } => "notify_join",
            Notification::Leave { .. } => "notify_leave",
            Notification::Signoff { .. } => "notify_signoff",
            Notification::TopicSet { .. } => "notify_topic_set",
            Notification::NickChange { .. } => "notify_nick_change",
            Notification::ChannelModeChange { .. } => "notify_cmode_change",
            Notification::ChannelUserModeChange { .. } => "notify_cumode_change",
            Notification::Motd { .. } => "notify_motd",
            Notification::ServerSignoff => "notify_server_signoff",
            Notification::Kicked { .. } => "notify_kicked",
            Notification::Killed { .. } => "notify_killed",
            Notification::Error { .. } => "notify_error",
            Notification::Watch { .. } => "notify_watch",
        }
    }
}

impl CommandReply {
    pub fn kind(&self) -> &'static str {
        match self {
            CommandReply::Whois { .. } => "reply_whois",
            CommandReply::Whowas { .. } => "reply_whowas",
            CommandReply::Identify { .. } => "reply_identify",
            CommandReply::Nick { .. } => "reply_nick",
            CommandReply::List { .. } => "reply_list",
            CommandReply::Topic { .. } => "reply_topic",
            CommandReply::Invite { .. } => "reply_invite",
            CommandReply::Kill { .. } => "reply_kill",
            CommandReply::Info { .. } => "reply_info",
            CommandReply::Stats => "reply_stats",
            CommandReply::Ping => "reply_ping",
            CommandReply::Oper => "reply_oper",
            CommandReply::Join { .. } => "reply_join",
            CommandReply::Motd { .. } => "reply_motd",
            CommandReply::ChannelMode { .. } => "reply_cmode",
            CommandReply::ChannelUserMode { .. } => "reply_cumode",
            CommandReply::Kick { .. } => "reply_kick",
            CommandReply::Ban { .. } => "reply_ban",
            CommandReply::Detach => "reply_detach",
            CommandReply::Watch => "reply_watch",
            CommandReply::SilcOper => "reply_silcoper",
            CommandReply::Leave { .. } => "reply_leave",
            CommandReply::Users { .. } => "reply_users",
            CommandReply::Service => "reply_service",
        }
    }
}
