// Application state module
// Read-only state shared by every connection task

use std::path::PathBuf;

use super::types::Config;
use crate::fixture::RouteTable;

/// Application state
///
/// Built once before the listener accepts connections and never mutated,
/// so request tasks share it through an `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    /// Base directory fixture files are read from
    pub root_dir: PathBuf,
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: &Config, routes: RouteTable, root_dir: PathBuf) -> Self {
        Self {
            config: config.clone(),
            routes,
            root_dir,
            access_log: config.logging.access_log,
        }
    }
}
