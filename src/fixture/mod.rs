//! Fixture route table
//!
//! Declarative route data, the policy type built from it, and the
//! read-only table consulted on every request.

mod policy;
pub mod routes;
mod table;

pub use policy::{HeaderLiteral, PolicyError, RoutePolicy, DEFAULT_FILE};
pub use routes::{FixtureRoute, Preset};
pub use table::RouteTable;
