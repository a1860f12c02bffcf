//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// SILC's registered port.
pub fn default_port() -> u16 {
    706
}

pub fn default_poll_interval_ms() -> u64 {
    200
}

pub fn default_realname() -> String {
    "SILC bridge".to_string()
}
