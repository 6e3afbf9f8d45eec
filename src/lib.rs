//! Static CSP test-fixture server
//!
//! Serves one HTML page under dozens of fixed routes, each with its own
//! `Content-Security-Policy`, cache directive or header-name variant, for
//! browser test harnesses that check CSP handling.

pub mod config;
pub mod error;
pub mod fixture;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use config::{AppState, Config};
use error::StartupError;
use fixture::RouteTable;

/// A bound fixture server that has not started accepting yet
pub struct FixtureServer {
    listener: tokio::net::TcpListener,
    state: Arc<AppState>,
}

impl FixtureServer {
    /// Build the route table, resolve the file directory and bind the listener
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(config: &Config) -> Result<Self, StartupError> {
        let routes = RouteTable::builtin()?;
        let root_dir = config.root_dir()?;
        let addr = config.get_socket_addr()?;
        let listener = server::create_listener(addr)?;

        Ok(Self {
            listener,
            state: Arc::new(AppState::new(config, routes, root_dir)),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, StartupError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Serve until `shutdown` resolves, then wait for in-flight connections
    pub async fn run<S>(self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        server::start_server_loop(self.listener, self.state, shutdown).await;
    }
}
