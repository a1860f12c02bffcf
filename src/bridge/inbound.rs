//! SILC events → IRC lines.
//!
//! Every event is handled in two steps: first each user and channel it
//! carries goes into the [`IdentityCache`], then the IRC lines are built.
//! Lines are attributed with `nick!user@host` for users and with the
//! session's remote host for numerics.

use silc_bridge_proto::{Message, Prefix, Response, with_sigil};
use tracing::{debug, info, warn};

use super::cache::IdentityCache;
use super::helpers::{from_user, server_reply, user_prefix};
use crate::config::IdentityConfig;
use crate::silc::{CommandReply, Notification, SilcChannel, SilcEvent, SilcUser, TopicChanger};

/// What an event did to the session's liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    Live,
    NotLive,
}

/// Result of translating one event.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Translation {
    /// Lines for the host framework, in emission order.
    pub lines: Vec<Message>,
    pub session: Option<SessionChange>,
}

impl Translation {
    fn none() -> Self {
        Self::default()
    }

    fn lines(lines: Vec<Message>) -> Self {
        Self {
            lines,
            session: None,
        }
    }

    fn session(change: SessionChange) -> Self {
        Self {
            lines: Vec::new(),
            session: Some(change),
        }
    }
}

/// Per-tick view of the session the translator needs for attribution.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    /// Server prefix for numerics and PONG.
    pub remote_host: &'a str,
    /// Our identity as the server reports it, if known yet.
    pub local_user: Option<&'a SilcUser>,
    /// Token of the last PING the host sent, echoed back in PONG.
    pub last_ping: &'a str,
}

/// Converts SILC events into IRC lines for the host framework.
#[derive(Debug, Clone)]
pub struct InboundTranslator {
    identity: IdentityConfig,
}

impl InboundTranslator {
    pub fn new(identity: IdentityConfig) -> Self {
        Self { identity }
    }

    /// Translate one event. Never fails: cache misses blank the dependent
    /// field or drop the line.
    pub fn translate(
        &self,
        cache: &mut IdentityCache,
        view: &SessionView<'_>,
        event: SilcEvent,
    ) -> Translation {
        debug!(kind = event.kind(), "silc event");
        match event {
            SilcEvent::Connected => {
                info!(server = %view.remote_host, "SILC session connected");
                Translation::session(SessionChange::Live)
            }
            SilcEvent::Disconnected { message } => {
                info!(server = %view.remote_host, message = %message, "SILC session disconnected");
                Translation::session(SessionChange::NotLive)
            }
            SilcEvent::CommandStatus {
                success,
                code,
                command,
                status,
            } => {
                debug!(success, code, command = %command, status, "command status");
                Translation::none()
            }
            SilcEvent::Say { message } => {
                info!(message = %message, "client library says");
                Translation::none()
            }
            SilcEvent::ChannelMessage {
                sender,
                channel,
                message,
                ..
            } => {
                cache.put_channel(&channel);
                cache.put_user(&sender);
                let target = with_sigil(&channel.channel_name);
                Translation::lines(split_privmsg(&sender, &target, &message))
            }
            SilcEvent::PrivateMessage {
                sender, message, ..
            } => {
                cache.put_user(&sender);
                Translation::lines(split_privmsg(&sender, &self.identity.username, &message))
            }
            SilcEvent::Notify(notification) => self.notify(cache, notification),
            SilcEvent::CommandReply(reply) => self.command_reply(cache, view, reply),
            SilcEvent::CommandFailed {
                command,
                command_line,
                error_code,
                error_message,
            } => {
                warn!(
                    command = %command,
                    command_line = %command_line,
                    error_code,
                    error = %error_message,
                    "SILC command failed"
                );
                Translation::none()
            }
        }
    }

    fn notify(&self, cache: &mut IdentityCache, notification: Notification) -> Translation {
        match notification {
            Notification::Join { joiner, channel } => {
                cache.put_user(&joiner);
                cache.put_channel(&channel);
                let line = from_user(&joiner, Message::join(with_sigil(&channel.channel_name)));
                Translation::lines(vec![line])
            }
            Notification::Leave { leaver, channel } => {
                cache.put_user(&leaver);
                cache.put_channel(&channel);
                let line = from_user(
                    &leaver,
                    Message::part_with_message(with_sigil(&channel.channel_name), ""),
                );
                Translation::lines(vec![line])
            }
            Notification::Signoff { user, message } => {
                cache.put_user(&user);
                debug!(nick = %user.nickname, message = %message, "signoff");
                Translation::lines(vec![from_user(&user, Message::quit_with_message(""))])
            }
            Notification::TopicSet {
                changer,
                channel,
                topic,
            } => {
                let prefix = match &changer {
                    TopicChanger::ChangedByUser(user) => {
                        cache.put_user(user);
                        user_prefix(user)
                    }
                    TopicChanger::ChangedByServer(source) => {
                        cache.put_channel(source);
                        Prefix::ServerName(source.channel_name.clone())
                    }
                };
                cache.put_channel(&channel.clone().with_topic(topic.clone()));
                let line =
                    Message::topic(with_sigil(&channel.channel_name), topic).with_prefix(prefix);
                Translation::lines(vec![line])
            }
            Notification::NickChange { old, new } => {
                cache.put_user(&old);
                cache.put_user(&new);
                Translation::lines(vec![from_user(&old, Message::nick(new.nickname.clone()))])
            }
            Notification::Kicked {
                kicked,
                reason,
                kicker,
                channel,
            } => {
                cache.put_user(&kicked);
                cache.put_user(&kicker);
                cache.put_channel(&channel);
                debug!(reason = %reason, "kick reason not forwarded");
                let line = from_user(
                    &kicker,
                    Message::kick(with_sigil(&channel.channel_name), kicked.nickname.clone()),
                );
                Translation::lines(vec![line])
            }
            Notification::Invite {
                channel,
                channel_name,
                inviter,
            } => {
                cache.put_channel(&channel);
                cache.put_user(&inviter);
                info!(channel = %channel_name, inviter = %inviter.nickname, "invited");
                Translation::none()
            }
            Notification::ChannelModeChange {
                changer,
                mode,
                channel,
                ..
            } => {
                if let Some(user) = &changer {
                    cache.put_user(user);
                }
                cache.put_channel(&channel.clone().with_mode(mode));
                info!(
                    channel = %channel.channel_name,
                    mode = format_args!("{:08x}", mode.bits()),
                    "channel mode changed"
                );
                Translation::none()
            }
            Notification::ChannelUserModeChange {
                changer,
                mode,
                user,
                channel,
            } => {
                if let Some(changer) = &changer {
                    cache.put_user(changer);
                }
                cache.put_user(&user);
                cache.put_channel(&channel);
                info!(
                    nick = %user.nickname,
                    channel = %channel.channel_name,
                    mode = format_args!("{mode:08x}"),
                    "channel user mode changed"
                );
                Translation::none()
            }
            Notification::Killed {
                killed,
                reason,
                killer,
                channel,
            } => {
                cache.put_user(&killed);
                if let Some(killer) = &killer {
                    cache.put_user(killer);
                }
                if let Some(channel) = &channel {
                    cache.put_channel(channel);
                }
                info!(nick = %killed.nickname, reason = %reason, "user killed");
                Translation::none()
            }
            Notification::Watch { watched, .. } => {
                cache.put_user(&watched);
                info!(nick = %watched.nickname, "watch notification");
                Translation::none()
            }
            Notification::None { message } | Notification::Motd { message } => {
                info!(message = %message, "notification");
                Translation::none()
            }
            Notification::Error { kind, message } => {
                warn!(kind, message = %message, "error notification");
                Translation::none()
            }
            Notification::ServerSignoff => {
                info!("server signoff");
                Translation::none()
            }
        }
    }

    fn command_reply(
        &self,
        cache: &mut IdentityCache,
        view: &SessionView<'_>,
        reply: CommandReply,
    ) -> Translation {
        match reply {
            CommandReply::Ping => {
                let line = Message::pong(view.remote_host, view.last_ping)
                    .with_prefix(Prefix::server(view.remote_host));
                Translation::lines(vec![line])
            }
            CommandReply::Join {
                channel,
                channel_name,
                topic,
                mode,
                user_limit,
                users,
                ..
            } => {
                let mut channel = channel.with_topic(topic.clone()).with_mode(mode);
                channel.user_limit = user_limit;
                cache.put_channel(&channel);
                for user in &users {
                    cache.put_user(user);
                }
                Translation::lines(self.join_reply(view, &channel_name, &topic, &users))
            }
            CommandReply::ChannelMode {
                channel,
                mode,
                user_limit,
            } => {
                let mut channel = channel.with_mode(mode);
                channel.user_limit = user_limit;
                cache.put_channel(&channel);
                let me = self.local_nickname(view);
                let target = with_sigil(&channel.channel_name);
                let created = chrono::Utc::now().timestamp();
                Translation::lines(vec![
                    server_reply(
                        view.remote_host,
                        Response::RPL_CHANNELMODEIS,
                        vec![me.clone(), target.clone(), mode.to_irc_modes()],
                    ),
                    server_reply(
                        view.remote_host,
                        Response::RPL_CREATIONTIME,
                        vec![me, target, created.to_string()],
                    ),
                ])
            }
            CommandReply::Users { channel, users } => {
                cache.put_channel(&channel);
                for user in &users {
                    cache.put_user(user);
                }
                Translation::lines(self.who_reply(view, &channel, &users))
            }
            CommandReply::Topic { channel, topic } => {
                cache.put_channel(&channel.clone().with_topic(topic.clone()));
                info!(channel = %channel.channel_name, topic = %topic, "topic reply");
                Translation::none()
            }
            CommandReply::Whois { user, mode, idle } => {
                cache.put_user(&user);
                info!(nick = %user.nickname, mode = format_args!("{mode:x}"), idle, "whois reply");
                Translation::none()
            }
            CommandReply::Whowas { user }
            | CommandReply::Nick { user, .. }
            | CommandReply::Kill { user } => {
                cache.put_user(&user);
                info!(nick = %user.nickname, "user reply");
                Translation::none()
            }
            CommandReply::Identify { user } => {
                if let Some(user) = &user {
                    cache.put_user(user);
                }
                Translation::none()
            }
            CommandReply::List { entry } => {
                match entry {
                    Some(entry) => {
                        cache.put_channel(&entry.channel);
                        info!(
                            channel = %entry.channel.channel_name,
                            topic = %entry.topic,
                            users = entry.user_count,
                            "list entry"
                        );
                    }
                    None => info!("end of list"),
                }
                Translation::none()
            }
            CommandReply::ChannelUserMode {
                mode,
                channel,
                user,
            } => {
                cache.put_channel(&channel);
                cache.put_user(&user);
                info!(nick = %user.nickname, channel = %channel.channel_name, mode, "cumode reply");
                Translation::none()
            }
            CommandReply::Kick { channel, user } => {
                cache.put_channel(&channel);
                cache.put_user(&user);
                Translation::none()
            }
            CommandReply::Ban { channel }
            | CommandReply::Leave { channel }
            | CommandReply::Invite { channel } => {
                cache.put_channel(&channel);
                Translation::none()
            }
            CommandReply::Motd { message } => {
                info!(message = %message, "motd");
                Translation::none()
            }
            CommandReply::Info { server_name, info } => {
                info!(server = %server_name, info = %info, "server info");
                Translation::none()
            }
            other @ (CommandReply::Stats
            | CommandReply::Oper
            | CommandReply::Detach
            | CommandReply::Watch
            | CommandReply::SilcOper
            | CommandReply::Service) => {
                debug!(kind = other.kind(), "unsupported command reply");
                Translation::none()
            }
        }
    }

    /// JOIN, MODE, 353, 366, 332: what an IRC server sends after a join.
    fn join_reply(
        &self,
        view: &SessionView<'_>,
        channel_name: &str,
        topic: &str,
        users: &[SilcUser],
    ) -> Vec<Message> {
        let me = self.local_user(view);
        let target = with_sigil(channel_name);
        let names = users
            .iter()
            .map(|u| u.nickname.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let server = view.remote_host;
        let username = &self.identity.username;

        vec![
            from_user(&me, Message::join(target.clone())),
            Message::mode(target.clone(), "+ns").with_prefix(Prefix::server(server)),
            server_reply(
                server,
                Response::RPL_NAMREPLY,
                vec![username.clone(), "@".to_string(), target.clone(), names],
            ),
            server_reply(
                server,
                Response::RPL_ENDOFNAMES,
                vec![username.clone(), target.clone(), "End of /NAMES list".to_string()],
            ),
            server_reply(
                server,
                Response::RPL_TOPIC,
                vec![username.clone(), target, topic.to_string()],
            ),
        ]
    }

    /// One 352 per member, then 315.
    fn who_reply(
        &self,
        view: &SessionView<'_>,
        channel: &SilcChannel,
        users: &[SilcUser],
    ) -> Vec<Message> {
        let me = self.local_nickname(view);
        let target = with_sigil(&channel.channel_name);
        let server = view.remote_host;

        let mut lines: Vec<Message> = users
            .iter()
            .map(|user| {
                server_reply(
                    server,
                    Response::RPL_WHOREPLY,
                    vec![
                        me.clone(),
                        target.clone(),
                        middle_param(&user.username),
                        middle_param(&user.hostname),
                        middle_param(server),
                        middle_param(&user.nickname),
                        "H@".to_string(),
                        format!("0 {}", user.realname),
                    ],
                )
            })
            .collect();
        lines.push(server_reply(
            server,
            Response::RPL_ENDOFWHO,
            vec![me, target, "End of /WHO list".to_string()],
        ));
        lines
    }

    fn local_user(&self, view: &SessionView<'_>) -> SilcUser {
        match view.local_user {
            Some(user) => user.clone(),
            None => {
                warn!("local user unknown, attributing to configured identity");
                SilcUser::new(
                    self.identity.nickname.clone(),
                    self.identity.username.clone(),
                    "",
                )
            }
        }
    }

    fn local_nickname(&self, view: &SessionView<'_>) -> String {
        view.local_user
            .map(|u| u.nickname.clone())
            .unwrap_or_else(|| self.identity.nickname.clone())
    }
}

/// One PRIVMSG per non-empty line of a (possibly multi-line) SILC message.
///
/// A message with no text at all still produces one empty PRIVMSG.
fn split_privmsg(sender: &SilcUser, target: &str, text: &str) -> Vec<Message> {
    let lines: Vec<Message> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| from_user(sender, Message::privmsg(target, line)))
        .collect();
    if !lines.is_empty() {
        return lines;
    }
    debug!(nick = %sender.nickname, target = %target, "empty message");
    vec![from_user(sender, Message::privmsg(target, ""))]
}

/// Middle parameters cannot be empty on the wire; blanked fields become `*`.
fn middle_param(field: &str) -> String {
    if field.is_empty() {
        "*".to_string()
    } else {
        field.to_string()
    }
}
