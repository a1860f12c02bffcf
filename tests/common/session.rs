//! A scripted SILC session that records every call the bridge makes.

use std::collections::VecDeque;

use silc_bridge::SessionError;
use silc_bridge::silc::{SilcChannel, SilcEvent, SilcSession, SilcUser};

/// One call made on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect(String, u16),
    ChannelMessage(String, String),
    PrivateMessage(String, String),
    Command(String),
}

#[derive(Debug)]
pub struct MockSession {
    pub calls: Vec<Call>,
    /// Events handed out by successive `run_one` calls, one batch each.
    pub batches: VecDeque<Vec<SilcEvent>>,
    pub runs: usize,
    pub remote_host: String,
    pub local_user: Option<SilcUser>,
    pub fail_connect: bool,
    pub fail_run: bool,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            batches: VecDeque::new(),
            runs: 0,
            remote_host: "silc.example.com".to_string(),
            local_user: Some(SilcUser::new("bot", "botident", "me.example.com")),
            fail_connect: false,
            fail_run: false,
        }
    }
}

#[allow(dead_code)]
impl MockSession {
    /// Queue events for the next `run_one`.
    pub fn push_batch(&mut self, events: Vec<SilcEvent>) {
        self.batches.push_back(events);
    }

    /// Command lines issued through `command_call`, in order.
    pub fn command_lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Command(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Calls other than `connect`.
    pub fn traffic(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::Connect(..)))
            .collect()
    }
}

impl SilcSession for MockSession {
    fn connect(&mut self, host: &str, port: u16) -> Result<(), SessionError> {
        self.calls.push(Call::Connect(host.to_string(), port));
        if self.fail_connect {
            return Err(SessionError::ConnectFailed {
                host: host.to_string(),
                port,
                reason: "refused".to_string(),
            });
        }
        Ok(())
    }

    fn run_one(&mut self) -> Result<Vec<SilcEvent>, SessionError> {
        self.runs += 1;
        if self.fail_run {
            return Err(SessionError::Processing("scripted failure".to_string()));
        }
        Ok(self.batches.pop_front().unwrap_or_default())
    }

    fn send_channel_message(
        &mut self,
        channel: &SilcChannel,
        text: &str,
    ) -> Result<(), SessionError> {
        self.calls.push(Call::ChannelMessage(
            channel.channel_name.clone(),
            text.to_string(),
        ));
        Ok(())
    }

    fn send_private_message(&mut self, user: &SilcUser, text: &str) -> Result<(), SessionError> {
        self.calls
            .push(Call::PrivateMessage(user.nickname.clone(), text.to_string()));
        Ok(())
    }

    fn command_call(&mut self, command_line: &str) -> Result<(), SessionError> {
        self.calls.push(Call::Command(command_line.to_string()));
        Ok(())
    }

    fn local_user(&self) -> Option<SilcUser> {
        self.local_user.clone()
    }

    fn remote_host(&self) -> String {
        self.remote_host.clone()
    }
}
