//! Route policy type
//!
//! A policy is the fixed association between a URL path and the file and
//! headers returned for it.

use hyper::header::{HeaderName, HeaderValue};
use serde::Serialize;
use std::fmt;

/// File served when a route does not name one
pub const DEFAULT_FILE: &str = "index.html";

/// A single configured response header, kept exactly as written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderLiteral {
    pub name: &'static str,
    pub value: &'static str,
}

/// Response policy for one fixture route
#[derive(Debug, Clone, Serialize)]
pub struct RoutePolicy {
    pub path: &'static str,
    pub file: &'static str,
    pub headers: Vec<HeaderLiteral>,
    /// Pre-parsed wire form of `headers`, same order
    #[serde(skip)]
    wire_headers: Vec<(HeaderName, HeaderValue)>,
}

/// Why a policy or table could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    InvalidHeaderName { path: &'static str, name: &'static str },
    InvalidHeaderValue { path: &'static str, name: &'static str },
    DuplicateHeader { path: &'static str, name: &'static str },
    DuplicatePath(&'static str),
    InvalidPath(&'static str),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeaderName { path, name } => {
                write!(f, "route {path}: invalid header name '{name}'")
            }
            Self::InvalidHeaderValue { path, name } => {
                write!(f, "route {path}: invalid value for header '{name}'")
            }
            Self::DuplicateHeader { path, name } => {
                write!(f, "route {path}: header '{name}' declared twice")
            }
            Self::DuplicatePath(path) => write!(f, "route {path} registered twice"),
            Self::InvalidPath(path) => write!(f, "route path '{path}' must start with '/'"),
        }
    }
}

impl std::error::Error for PolicyError {}

impl RoutePolicy {
    /// Build a policy, validating every header literal once up front
    pub fn new(
        path: &'static str,
        file: &'static str,
        headers: &[HeaderLiteral],
    ) -> Result<Self, PolicyError> {
        if !path.starts_with('/') {
            return Err(PolicyError::InvalidPath(path));
        }

        let mut wire_headers: Vec<(HeaderName, HeaderValue)> = Vec::with_capacity(headers.len());
        for header in headers {
            let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|_| {
                PolicyError::InvalidHeaderName {
                    path,
                    name: header.name,
                }
            })?;
            if wire_headers.iter().any(|(existing, _)| *existing == name) {
                return Err(PolicyError::DuplicateHeader {
                    path,
                    name: header.name,
                });
            }
            let value = HeaderValue::from_str(header.value).map_err(|_| {
                PolicyError::InvalidHeaderValue {
                    path,
                    name: header.name,
                }
            })?;
            wire_headers.push((name, value));
        }

        Ok(Self {
            path,
            file: if file.is_empty() { DEFAULT_FILE } else { file },
            headers: headers.to_vec(),
            wire_headers,
        })
    }

    /// Headers in the order they are applied to a response
    pub fn wire_headers(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.wire_headers.iter().map(|(name, value)| (name, value))
    }

    /// Literal value configured for `name`, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value)
    }
}
