use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Ledger dump file loaded into the in-memory store at startup.
    pub dump_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:7233".parse().expect("valid literal addr"),
            dump_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(
            config.bind_addr,
            "127.0.0.1:7233".parse::<SocketAddr>().unwrap()
        );
        assert!(config.dump_path.is_none());
    }

    #[test]
    fn toml_roundtrip() {
        let text = "bind_addr = \"0.0.0.0:8080\"\ndump_path = \"/var/lib/lens/dump.json\"\n";
        let config: ServerConfig = toml::from_str(text).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.dump_path.as_deref(),
            Some(Path::new("/var/lib/lens/dump.json"))
        );
    }
}
