//! Server configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDR` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `PRESETS_PATH` | unset (embedded preset table) |
//! | `ANALYTICS_LOG` | unset (analytics disabled) |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub presets_path: Option<PathBuf>,
    pub analytics_log: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            presets_path: None,
            analytics_log: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_empty("BIND_ADDR")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.bind_addr);

        let port = non_empty("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self {
            bind_addr,
            port,
            presets_path: non_empty("PRESETS_PATH").map(PathBuf::from),
            analytics_log: non_empty("ANALYTICS_LOG").map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
