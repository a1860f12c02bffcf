//! The bridge driver: owns the session, the cache and both translators.
//!
//! One [`BridgeDriver::tick`] is one polling cycle:
//! 1. propagate the live flag to the host,
//! 2. run one SILC event-processing step and translate what it produced,
//! 3. if connected, dispatch one pending host command.
//!
//! The host picks servers: [`BridgeDriver::reconnect`] tries the one the
//! host offers and reports failure without retrying. [`BridgeDriver::run`]
//! moves on to the host's next server after a lost session.

use std::future::Future;
use std::path::Path;

use tokio::time::MissedTickBehavior;
use tracing::{Span, debug, error, info, warn};

use super::cache::IdentityCache;
use super::inbound::{InboundTranslator, SessionChange, SessionView};
use super::outbound::{Outcome, OutboundTranslator};
use crate::config::Config;
use crate::error::{BridgeError, BridgeResult};
use crate::host::HostFramework;
use crate::silc::SilcSession;
use crate::telemetry::spans;

/// Connection state of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Disconnected,
    Connecting,
    Connected,
    /// Terminal. Reached only through [`BridgeDriver::stop`].
    Stopped,
}

pub struct BridgeDriver<S, H> {
    config: Config,
    session: S,
    host: H,
    state: DriverState,
    cache: IdentityCache,
    inbound: InboundTranslator,
    outbound: OutboundTranslator,
    last_ping: String,
    span: Span,
}

impl<S: SilcSession, H: HostFramework> BridgeDriver<S, H> {
    pub fn new(config: Config, session: S, host: H) -> Self {
        let inbound = InboundTranslator::new(config.identity.clone());
        let outbound = OutboundTranslator::new(config.identity.clone());
        Self {
            config,
            session,
            host,
            state: DriverState::Disconnected,
            cache: IdentityCache::new(),
            inbound,
            outbound,
            last_ping: String::new(),
            span: Span::none(),
        }
    }

    /// Load and validate the config at `path`, then build the driver.
    ///
    /// `make_host` sees the loaded config, typically to build its server
    /// pool from `config.servers`.
    pub fn from_config_file<P, F>(path: P, session: S, make_host: F) -> BridgeResult<Self>
    where
        P: AsRef<Path>,
        F: FnOnce(&Config) -> H,
    {
        let config = Config::load_validated(path)?;
        let host = make_host(&config);
        Ok(Self::new(config, session, host))
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn cache(&self) -> &IdentityCache {
        &self.cache
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Connect to the next server the host offers.
    ///
    /// On failure the state is back to `Disconnected` and the error is
    /// returned; picking another server is up to the caller.
    pub fn reconnect(&mut self) -> BridgeResult {
        if self.state == DriverState::Stopped {
            return Err(BridgeError::Stopped);
        }
        let server = self
            .host
            .next_server()
            .ok_or(BridgeError::NoServerAvailable)?;

        self.span = spans::bridge(&server.to_string());
        let _enter = self.span.clone().entered();
        info!(server = %server, "Connecting to SILC server");

        self.state = DriverState::Connecting;
        if let Err(e) = self.session.connect(&server.host, server.port) {
            error!(server = %server, error = %e, code = e.error_code(), "Connect failed");
            self.state = DriverState::Disconnected;
            return Err(e.into());
        }
        Ok(())
    }

    /// Run one polling cycle.
    pub fn tick(&mut self) -> BridgeResult {
        if self.state == DriverState::Stopped {
            return Err(BridgeError::Stopped);
        }
        let span = self.span.clone();
        let _enter = span.enter();

        self.host.set_live(self.state == DriverState::Connected);

        let events = self.session.run_one().map_err(|e| {
            error!(error = %e, code = e.error_code(), "SILC event processing failed");
            BridgeError::from(e)
        })?;

        for event in events {
            let remote_host = self.session.remote_host();
            let local_user = self.session.local_user();
            let view = SessionView {
                remote_host: &remote_host,
                local_user: local_user.as_ref(),
                last_ping: &self.last_ping,
            };
            let translation = self.inbound.translate(&mut self.cache, &view, event);

            match translation.session {
                Some(SessionChange::Live) => self.state = DriverState::Connected,
                Some(SessionChange::NotLive) => self.state = DriverState::Disconnected,
                None => {}
            }
            for line in translation.lines {
                self.host.feed_inbound_line(line);
            }
        }

        if self.state == DriverState::Connected {
            self.pump_outbound()?;
        }
        Ok(())
    }

    fn pump_outbound(&mut self) -> BridgeResult {
        let Some(msg) = self.host.take_next_outbound_command() else {
            return Ok(());
        };

        let dispatch = self
            .outbound
            .dispatch(&msg, &self.cache, &mut self.session, &mut self.last_ping)
            .map_err(|e| {
                error!(command = %msg.command.verb(), error = %e, code = e.error_code(), "Dispatch failed");
                BridgeError::from(e)
            })?;

        match &dispatch.outcome {
            Outcome::Forwarded | Outcome::Answered => {
                debug!(command = %msg.command.verb(), outcome = ?dispatch.outcome, "dispatched");
            }
            Outcome::Dropped { reason } => {
                warn!(command = %msg.command.verb(), reason = ?reason, "command dropped");
            }
            Outcome::Ignored => debug!(command = %msg.command.verb(), "command ignored"),
            Outcome::Unsupported => {
                warn!(command = %msg.command.verb(), "command not supported over SILC");
            }
        }
        for reply in dispatch.replies {
            self.host.feed_inbound_line(reply);
        }
        Ok(())
    }

    /// Enter the terminal state.
    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            info!("Bridge stopped");
            self.state = DriverState::Stopped;
            self.host.set_live(false);
        }
    }

    /// Tick every `poll_interval_ms` until `shutdown` resolves.
    ///
    /// Connects first if no session is up. When a tick leaves the session
    /// disconnected, the loop reconnects once to the server the host picks
    /// next; a failed connect ends the loop like any tick fault. Faults are
    /// returned; on shutdown the driver is left `Stopped`.
    pub async fn run<F>(&mut self, shutdown: F) -> BridgeResult
    where
        F: Future<Output = ()>,
    {
        if self.state == DriverState::Disconnected {
            self.reconnect()?;
        }

        let mut interval = tokio::time::interval(self.config.driver.poll_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = interval.tick() => {
                    self.tick()?;
                    if self.state == DriverState::Disconnected {
                        info!("Session lost, moving to the next server");
                        self.reconnect()?;
                    }
                }
            }
        }

        self.stop();
        Ok(())
    }
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received"),
        Err(e) => {
            error!(error = %e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
