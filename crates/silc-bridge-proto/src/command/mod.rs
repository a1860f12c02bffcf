//! IRC commands understood or emitted by the bridge.

mod serialize;
mod types;

pub use self::types::Command;
