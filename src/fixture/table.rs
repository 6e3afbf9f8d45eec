//! Route table
//!
//! Built once before the listener starts and shared read-only afterwards.

use serde::Serialize;
use std::collections::HashMap;

use super::policy::{PolicyError, RoutePolicy};
use super::routes::{FixtureRoute, ROOT, ROUTES};

/// Immutable mapping from request path to response policy
#[derive(Debug)]
pub struct RouteTable {
    root: RoutePolicy,
    routes: Vec<RoutePolicy>,
    index: HashMap<&'static str, usize>,
}

impl RouteTable {
    /// Table holding every fixture route
    pub fn builtin() -> Result<Self, PolicyError> {
        Self::from_routes(&ROOT, ROUTES)
    }

    /// Build a table from a default entry and the numbered routes
    pub fn from_routes(root: &FixtureRoute, routes: &[FixtureRoute]) -> Result<Self, PolicyError> {
        let root = compile(root)?;

        let mut compiled = Vec::with_capacity(routes.len());
        let mut index = HashMap::with_capacity(routes.len());
        for fixture in routes {
            if fixture.path == root.path || index.contains_key(fixture.path) {
                return Err(PolicyError::DuplicatePath(fixture.path));
            }
            index.insert(fixture.path, compiled.len());
            compiled.push(compile(fixture)?);
        }

        Ok(Self {
            root,
            routes: compiled,
            index,
        })
    }

    /// Exact-match lookup, no prefix or wildcard handling
    pub fn lookup(&self, path: &str) -> Option<&RoutePolicy> {
        if path == self.root.path {
            return Some(&self.root);
        }
        self.index.get(path).map(|&i| &self.routes[i])
    }

    /// Default entry first, then the numbered routes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &RoutePolicy> {
        std::iter::once(&self.root).chain(self.routes.iter())
    }

    /// Never zero, the default entry is always present
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }

    /// Route listing as TOML, one `[[route]]` table per entry
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        #[derive(Serialize)]
        struct Manifest<'a> {
            route: Vec<&'a RoutePolicy>,
        }

        toml::to_string(&Manifest {
            route: self.iter().collect(),
        })
    }
}

fn compile(fixture: &FixtureRoute) -> Result<RoutePolicy, PolicyError> {
    RoutePolicy::new(
        fixture.path,
        fixture.preset.file(),
        &fixture.preset.headers(),
    )
}
