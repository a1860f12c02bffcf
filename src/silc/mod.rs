//! SILC side of the bridge: identity records, the closed event set and the
//! client session trait.

mod event;
mod session;
mod types;

pub use event::{CommandReply, ListEntry, Notification, SilcEvent, TopicChanger};
pub use session::SilcSession;
pub use types::{ChannelId, ChannelModes, ClientId, SilcChannel, SilcUser};
