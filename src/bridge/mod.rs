//! The protocol bridge.
//!
//! [`IdentityCache`] keeps SILC handles addressable by IRC names,
//! [`InboundTranslator`] turns SILC events into IRC lines,
//! [`OutboundTranslator`] turns host IRC commands into SILC calls, and
//! [`BridgeDriver`] runs the polling loop over all three.

mod cache;
mod driver;
mod helpers;
mod inbound;
mod outbound;

pub use cache::IdentityCache;
pub use driver::{BridgeDriver, DriverState, shutdown_signal};
pub use helpers::{server_reply, user_prefix};
pub use inbound::{InboundTranslator, SessionChange, SessionView, Translation};
pub use outbound::{Dispatch, DropReason, OutboundTranslator, Outcome};
