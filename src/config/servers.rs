//! SILC server entries.

use serde::Deserialize;

use super::defaults::default_port;

/// One SILC server the bridge may connect to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerEntry {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerEntry {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl std::fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Round-robin pool over the configured servers.
///
/// Each call to [`ServerPool::next_server`] hands out the next entry,
/// wrapping around, so a reconnect after a lost session tries the following
/// server.
#[derive(Debug, Clone, Default)]
pub struct ServerPool {
    servers: Vec<ServerEntry>,
    next: usize,
}

impl ServerPool {
    pub fn new(servers: Vec<ServerEntry>) -> Self {
        Self { servers, next: 0 }
    }

    pub fn next_server(&mut self) -> Option<ServerEntry> {
        if self.servers.is_empty() {
            return None;
        }
        let entry = self.servers[self.next % self.servers.len()].clone();
        self.next = (self.next + 1) % self.servers.len();
        Some(entry)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_has_no_server() {
        let mut pool = ServerPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.next_server(), None);
    }

    #[test]
    fn pool_wraps_around() {
        let mut pool = ServerPool::new(vec![
            ServerEntry::new("a.example.com", 706),
            ServerEntry::new("b.example.com", 706),
        ]);
        assert_eq!(pool.next_server().unwrap().host, "a.example.com");
        assert_eq!(pool.next_server().unwrap().host, "b.example.com");
        assert_eq!(pool.next_server().unwrap().host, "a.example.com");
    }

    #[test]
    fn display_is_host_and_port() {
        assert_eq!(ServerEntry::new("silc.example.com", 706).to_string(), "silc.example.com:706");
    }
}
