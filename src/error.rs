use std::io;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load configuration")]
    Config {
        #[from]
        source: ConfigError,
    },
    #[error("could not bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve {
        #[source]
        source: io::Error,
    },
}
