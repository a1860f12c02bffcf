//! The host bot framework seam.
//!
//! The host owns the IRC-side message loop. The bridge feeds it synthesized
//! lines, takes at most one command from it per tick, and asks it which SILC
//! server to try next.

use std::collections::VecDeque;

use silc_bridge_proto::Message;

use crate::config::{ServerEntry, ServerPool};

pub trait HostFramework {
    /// Deliver a synthesized IRC line to the framework.
    fn feed_inbound_line(&mut self, line: Message);

    /// Next command the framework wants sent, if any.
    fn take_next_outbound_command(&mut self) -> Option<Message>;

    /// Whether the bridge currently has a live session.
    fn set_live(&mut self, live: bool);

    /// Server to use for the next connection attempt.
    fn next_server(&mut self) -> Option<ServerEntry>;
}

/// In-memory host: two queues and a round-robin server pool.
#[derive(Debug, Default)]
pub struct QueueHost {
    inbound: VecDeque<Message>,
    outbound: VecDeque<Message>,
    servers: ServerPool,
    live: bool,
}

impl QueueHost {
    pub fn new(servers: ServerPool) -> Self {
        Self {
            servers,
            ..Default::default()
        }
    }

    /// Queue a command for the bridge to send.
    pub fn push_outbound(&mut self, msg: Message) {
        self.outbound.push_back(msg);
    }

    /// Take every line the bridge has delivered so far.
    pub fn drain_inbound(&mut self) -> Vec<Message> {
        self.inbound.drain(..).collect()
    }

    pub fn pending_outbound(&self) -> usize {
        self.outbound.len()
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}

impl HostFramework for QueueHost {
    fn feed_inbound_line(&mut self, line: Message) {
        self.inbound.push_back(line);
    }

    fn take_next_outbound_command(&mut self) -> Option<Message> {
        self.outbound.pop_front()
    }

    fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    fn next_server(&mut self) -> Option<ServerEntry> {
        self.servers.next_server()
    }
}
