//! Integration test common infrastructure.
//!
//! Provides a scripted SILC session, a ready-made driver over an in-memory
//! host, and helpers for asserting on the IRC lines the host received.

pub mod session;

use silc_bridge::BridgeDriver;
use silc_bridge::config::{Config, DriverConfig, IdentityConfig, ServerEntry, ServerPool};
use silc_bridge::host::QueueHost;
use silc_bridge::silc::SilcEvent;

#[allow(unused_imports)]
pub use session::{Call, MockSession};

pub type TestDriver = BridgeDriver<MockSession, QueueHost>;

pub fn test_config() -> Config {
    Config {
        identity: IdentityConfig {
            nickname: "bot".to_string(),
            username: "botident".to_string(),
            realname: "Bridge Bot".to_string(),
        },
        servers: vec![
            ServerEntry::new("silc.example.com", 706),
            ServerEntry::new("backup.example.com", 706),
        ],
        driver: DriverConfig::default(),
    }
}

/// Driver in `Disconnected` state with an empty session script.
pub fn driver() -> TestDriver {
    let config = test_config();
    let host = QueueHost::new(ServerPool::new(config.servers.clone()));
    BridgeDriver::new(config, MockSession::default(), host)
}

/// Driver that has connected and seen `SilcEvent::Connected`.
#[allow(dead_code)]
pub fn connected_driver() -> TestDriver {
    let mut driver = driver();
    driver.reconnect().expect("reconnect");
    driver.session_mut().push_batch(vec![SilcEvent::Connected]);
    driver.tick().expect("connect tick");
    driver
}

/// Lines delivered to the host since the last call, rendered as wire text.
#[allow(dead_code)]
pub fn drain_lines(driver: &mut TestDriver) -> Vec<String> {
    driver
        .host_mut()
        .drain_inbound()
        .iter()
        .map(ToString::to_string)
        .collect()
}
