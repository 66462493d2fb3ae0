use serde::Deserialize;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file format")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

/// Where the service listens. Everything else about its behaviour is fixed.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            address: DEFAULT_ADDRESS,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Settings, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_toml_str(&contents)
    }

    pub fn with_overrides(self, address: Option<IpAddr>, port: Option<u16>) -> Settings {
        Settings {
            address: address.unwrap_or(self.address),
            port: port.unwrap_or(self.port),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
