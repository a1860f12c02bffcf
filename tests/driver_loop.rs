//! Integration tests for the driver state machine and run loop.

mod common;

use std::io::Write;
use std::time::Duration;

use common::{Call, MockSession, driver, test_config};
use silc_bridge::config::ServerPool;
use silc_bridge::host::{HostFramework, QueueHost};
use silc_bridge::silc::SilcEvent;
use silc_bridge::{BridgeDriver, BridgeError, DriverState, SessionError};

#[test]
fn test_reconnect_walks_the_server_pool() {
    let mut driver = driver();
    assert_eq!(driver.state(), DriverState::Disconnected);

    driver.reconnect().unwrap();
    assert_eq!(driver.state(), DriverState::Connecting);
    driver.reconnect().unwrap();

    assert_eq!(
        driver.session().calls,
        vec![
            Call::Connect("silc.example.com".into(), 706),
            Call::Connect("backup.example.com".into(), 706),
        ]
    );
}

#[test]
fn test_reconnect_without_servers() {
    let host = QueueHost::new(ServerPool::default());
    let mut driver = BridgeDriver::new(test_config(), MockSession::default(), host);

    let err = driver.reconnect().unwrap_err();
    assert!(matches!(err, BridgeError::NoServerAvailable));
    assert!(driver.session().calls.is_empty());
}

#[test]
fn test_failed_connect_is_not_retried() {
    let mut driver = driver();
    driver.session_mut().fail_connect = true;

    let err = driver.reconnect().unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Session(SessionError::ConnectFailed { .. })
    ));
    assert_eq!(driver.state(), DriverState::Disconnected);
    assert_eq!(driver.session().calls.len(), 1);
}

#[test]
fn test_live_flag_follows_session_events() {
    let mut driver = driver();
    driver.reconnect().unwrap();

    driver.session_mut().push_batch(vec![SilcEvent::Connected]);
    driver.tick().unwrap();
    assert_eq!(driver.state(), DriverState::Connected);
    // propagated at the start of the next tick
    assert!(!driver.host().is_live());
    driver.tick().unwrap();
    assert!(driver.host().is_live());

    driver.session_mut().push_batch(vec![SilcEvent::Disconnected {
        message: "server going down".into(),
    }]);
    driver.tick().unwrap();
    assert_eq!(driver.state(), DriverState::Disconnected);
    driver.tick().unwrap();
    assert!(!driver.host().is_live());
}

#[test]
fn test_one_command_per_tick() {
    let mut driver = common::connected_driver();
    for chan in ["#a", "#b", "#c"] {
        driver
            .host_mut()
            .push_outbound(format!("JOIN {chan}").parse().unwrap());
    }

    driver.tick().unwrap();
    assert_eq!(driver.session().command_lines(), vec!["JOIN a"]);
    driver.tick().unwrap();
    driver.tick().unwrap();
    assert_eq!(driver.session().command_lines(), vec!["JOIN a", "JOIN b", "JOIN c"]);
    assert_eq!(driver.host().pending_outbound(), 0);
}

#[test]
fn test_session_fault_is_returned_to_caller() {
    let mut driver = common::connected_driver();
    driver.session_mut().fail_run = true;

    let err = driver.tick().unwrap_err();
    assert_eq!(err.error_code(), "processing");
    assert!(err.is_recoverable());

    // the driver survives the fault
    driver.session_mut().fail_run = false;
    driver.tick().unwrap();
}

#[test]
fn test_stopped_is_terminal() {
    let mut driver = common::connected_driver();
    driver.stop();
    assert_eq!(driver.state(), DriverState::Stopped);
    assert!(!driver.host().is_live());
    assert!(matches!(driver.tick(), Err(BridgeError::Stopped)));
    assert!(matches!(driver.reconnect(), Err(BridgeError::Stopped)));
}

#[tokio::test(start_paused = true)]
async fn test_run_until_shutdown() {
    let mut driver = driver();
    driver.session_mut().push_batch(vec![SilcEvent::Connected]);
    driver
        .host_mut()
        .push_outbound("JOIN #bot".parse().unwrap());

    driver
        .run(tokio::time::sleep(Duration::from_millis(1_000)))
        .await
        .unwrap();

    assert_eq!(driver.state(), DriverState::Stopped);
    assert!(driver.session().runs >= 2);
    assert_eq!(
        driver.session().calls,
        vec![
            Call::Connect("silc.example.com".into(), 706),
            Call::Command("JOIN bot".into()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_returns_tick_fault() {
    let mut driver = driver();
    driver.session_mut().fail_run = true;

    let result = driver
        .run(tokio::time::sleep(Duration::from_secs(60)))
        .await;

    assert!(matches!(
        result,
        Err(BridgeError::Session(SessionError::Processing(_)))
    ));
    assert_ne!(driver.state(), DriverState::Stopped);
}

#[test]
fn test_host_can_drive_reconnect_after_disconnect() {
    let mut driver = common::connected_driver();
    driver.session_mut().push_batch(vec![SilcEvent::Disconnected {
        message: "lost".into(),
    }]);
    driver.tick().unwrap();
    assert_eq!(driver.state(), DriverState::Disconnected);

    let next = driver.host_mut().next_server().unwrap();
    assert_eq!(next.host, "backup.example.com");
    driver.reconnect().unwrap();
    assert_eq!(
        driver.session().calls.last(),
        Some(&Call::Connect("silc.example.com".into(), 706))
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_moves_to_next_server_after_session_loss() {
    let mut driver = driver();
    driver.session_mut().push_batch(vec![SilcEvent::Connected]);
    driver.session_mut().push_batch(vec![SilcEvent::Disconnected {
        message: "server going down".into(),
    }]);
    driver.session_mut().push_batch(vec![SilcEvent::Connected]);

    driver
        .run(tokio::time::sleep(Duration::from_millis(1_000)))
        .await
        .unwrap();

    let connects: Vec<&Call> = driver
        .session()
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Connect(..)))
        .collect();
    assert_eq!(
        connects,
        vec![
            &Call::Connect("silc.example.com".into(), 706),
            &Call::Connect("backup.example.com".into(), 706),
        ]
    );
    assert_eq!(driver.state(), DriverState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_run_returns_failed_reconnect() {
    let mut driver = driver();
    driver.session_mut().push_batch(vec![SilcEvent::Connected]);
    driver.session_mut().push_batch(vec![SilcEvent::Disconnected {
        message: "lost".into(),
    }]);

    // connect up front so only the reconnect after the drop fails
    driver.reconnect().unwrap();
    driver.session_mut().fail_connect = true;

    let result = driver
        .run(tokio::time::sleep(Duration::from_secs(60)))
        .await;

    assert!(matches!(
        result,
        Err(BridgeError::Session(SessionError::ConnectFailed { .. }))
    ));
    assert_eq!(driver.state(), DriverState::Disconnected);
    assert_eq!(driver.session().runs, 2);
    assert_eq!(
        driver.session().calls.last(),
        Some(&Call::Connect("backup.example.com".into(), 706))
    );
}

#[test]
fn test_from_config_file_builds_host_from_servers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[identity]
nickname = "bot"
username = "botident"

[[servers]]
host = "silc.example.com"
"#
    )
    .unwrap();

    let mut driver = BridgeDriver::from_config_file(file.path(), MockSession::default(), |config| {
        QueueHost::new(ServerPool::new(config.servers.clone()))
    })
    .unwrap();

    driver.reconnect().unwrap();
    assert_eq!(
        driver.session().calls,
        vec![Call::Connect("silc.example.com".into(), 706)]
    );
}

#[test]
fn test_from_config_file_reports_invalid_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[identity]\nnickname = \"\"\nusername = \"bot\"\n").unwrap();

    let err = BridgeDriver::from_config_file(file.path(), MockSession::default(), |config| {
        QueueHost::new(ServerPool::new(config.servers.clone()))
    })
    .err()
    .unwrap();

    assert!(matches!(err, BridgeError::Config(_)));
    assert_eq!(err.error_code(), "config");
    assert!(!err.is_recoverable());
}
