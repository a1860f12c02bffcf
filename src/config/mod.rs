//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, IdentityConfig, DriverConfig)
//! - [`servers`]: SILC server entries and the round-robin pool built from them
//! - [`validation`]: Startup checks that report every problem at once

mod defaults;
mod servers;
mod types;
pub mod validation;

pub use servers::{ServerEntry, ServerPool};
pub use types::{Config, ConfigError, DriverConfig, IdentityConfig};
