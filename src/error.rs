//! Startup error type
//!
//! Only failures that stop the process live here. Anything that goes wrong
//! while answering a request becomes an HTTP response for that request.

use std::fmt;
use std::net::SocketAddr;

use crate::fixture::PolicyError;

#[derive(Debug)]
pub enum StartupError {
    /// Configuration sources could not be read or deserialized
    Config(config::ConfigError),
    /// Process working directory is unavailable
    WorkingDir(std::io::Error),
    /// Host/port did not resolve to a socket address
    Address(String),
    /// Listening socket could not be created or bound
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    /// Route table literals failed validation
    Routes(PolicyError),
    /// Log files, runtime construction and other I/O at startup
    Io(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::WorkingDir(e) => write!(f, "cannot determine working directory: {e}"),
            Self::Address(msg) => write!(f, "invalid listen address {msg}"),
            Self::Bind { addr, source } => write!(f, "cannot bind {addr}: {source}"),
            Self::Routes(e) => write!(f, "route table: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::WorkingDir(e) | Self::Io(e) | Self::Bind { source: e, .. } => Some(e),
            Self::Routes(e) => Some(e),
            Self::Address(_) => None,
        }
    }
}

impl From<config::ConfigError> for StartupError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<PolicyError> for StartupError {
    fn from(e: PolicyError) -> Self {
        Self::Routes(e)
    }
}
