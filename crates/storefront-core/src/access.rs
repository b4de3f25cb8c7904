//! Access policy: which routes need a session marker.
//!
//! Both services consult the same policy type; the web client protects the
//! create-item page, the catalog service can optionally protect its write
//! endpoints.

use actix_web::http::Method;

use crate::session::SessionMarker;

/// A path prefix that needs a session marker, optionally only for some methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRoute {
    prefix: String,
    methods: Vec<Method>,
}

impl ProtectedRoute {
    /// Protect `prefix` for every method.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_end_matches('/');
        Self {
            prefix: if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() },
            methods: Vec::new(),
        }
    }

    /// Restrict the protection to `methods`. An empty list means all methods.
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Segment-aware: `/add-item` covers `/add-item` and `/add-item/x`, not `/add-items`.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        let path_match = self.prefix == "/"
            || path == self.prefix
            || path
                .strip_prefix(self.prefix.as_str())
                .is_some_and(|rest| rest.starts_with('/'));
        path_match && (self.methods.is_empty() || self.methods.contains(method))
    }
}

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

/// Ordered set of protected routes. An empty policy grants everything.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    routes: Vec<ProtectedRoute>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, route: ProtectedRoute) -> Self {
        self.routes.push(route);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn requires_session(&self, method: &Method, path: &str) -> bool {
        self.routes.iter().any(|r| r.matches(method, path))
    }

    pub fn check(&self, method: &Method, path: &str, marker: Option<SessionMarker>) -> Access {
        if marker.is_some() || !self.requires_session(method, path) {
            Access::Granted
        } else {
            Access::Denied
        }
    }
}
