//! silc-bridge - SILC to IRC protocol bridge
//!
//! Lets an IRC-speaking bot framework operate against a SILC network. SILC
//! client events become synthesized IRC lines for the framework; IRC
//! commands from the framework become SILC client calls.
//!
//! ```no_run
//! use silc_bridge::config::{Config, ServerPool};
//! use silc_bridge::host::QueueHost;
//! use silc_bridge::silc::SilcSession;
//! use silc_bridge::{BridgeDriver, bridge::shutdown_signal};
//!
//! async fn start(session: impl SilcSession) -> Result<(), Box<dyn std::error::Error>> {
//!     silc_bridge::telemetry::init_tracing();
//!     let mut driver = BridgeDriver::from_config_file("bridge.toml", session, |config: &Config| {
//!         QueueHost::new(ServerPool::new(config.servers.clone()))
//!     })?;
//!     driver.run(shutdown_signal()).await?;
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod silc;
pub mod telemetry;

pub use bridge::{BridgeDriver, DriverState, IdentityCache, Outcome};
pub use error::{BridgeError, BridgeResult, SessionError};
pub use silc_bridge_proto as proto;
