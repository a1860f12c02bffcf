//! The SILC client seam.
//!
//! Transport, key exchange and key-pair handling all live behind this trait.
//! The bridge only ever pulls events and pushes sends/commands through it.

use crate::error::SessionError;

use super::event::SilcEvent;
use super::types::{SilcChannel, SilcUser};

/// An established (or establishing) SILC client session.
///
/// Calls are made from the driver tick only; implementations never see
/// concurrent use.
pub trait SilcSession {
    /// Start connecting to a SILC server.
    ///
    /// Returning `Ok` does not mean the session is live: that is reported
    /// later as [`SilcEvent::Connected`].
    fn connect(&mut self, host: &str, port: u16) -> Result<(), SessionError>;

    /// Run one iteration of the client library and return whatever events
    /// it produced, in order.
    fn run_one(&mut self) -> Result<Vec<SilcEvent>, SessionError>;

    fn send_channel_message(
        &mut self,
        channel: &SilcChannel,
        text: &str,
    ) -> Result<(), SessionError>;

    fn send_private_message(&mut self, user: &SilcUser, text: &str) -> Result<(), SessionError>;

    /// Issue a SILC command line such as `JOIN bot` or `USERS bot`.
    fn command_call(&mut self, command_line: &str) -> Result<(), SessionError>;

    /// Our own identity as the server knows it, once connected.
    fn local_user(&self) -> Option<SilcUser>;

    /// Host name of the server this session talks to.
    fn remote_host(&self) -> String;
}
