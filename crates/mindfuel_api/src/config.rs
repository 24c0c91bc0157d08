use std::{net::SocketAddr, path::PathBuf};

pub const DEFAULT_DB_PATH: &str = "mindfuel.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Listener and store location for [`crate::serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: PathBuf,
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, DEFAULT_BIND, DEFAULT_DB_PATH};

    #[test]
    fn defaults_match_published_constants() {
        let config = ServerConfig::default();
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.db_path.to_str(), Some(DEFAULT_DB_PATH));
    }
}
