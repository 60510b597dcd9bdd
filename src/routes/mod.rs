//! Route Table Module
//!
//! The client-side route table, split by access level the same way the pages
//! are: `public` pages anyone can open, `admin` pages behind the login gate.
//! The gate itself lives in `crate::auth`; this module only declares which
//! routes need it and resolves paths to routes.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::auth::{GuardDecision, NavigationGuard};

/// Pages reachable without a session.
pub mod public;

/// Administration pages. Everything except the login page requires a session.
pub mod admin;

/// Where unauthenticated navigation to a protected route is sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Page
///
/// Identifier of the component a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    ProductDetail,
    BlogList,
    BlogDetail,
    AdminLogin,
    AdminDashboard,
    AdminProductManagement,
}

/// RouteEntry
///
/// One row of the route table. Path segments starting with `:` are
/// parameters and match any non-empty segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub requires_auth: bool,
}

impl RouteEntry {
    pub const fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self {
            path,
            name,
            page,
            requires_auth: false,
        }
    }

    /// Marks the route as requiring a session marker.
    pub const fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Captured parameters when `path` matches this entry's pattern.
    fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let pattern: Vec<&str> = segments(self.path).collect();
        let actual: Vec<&str> = segments(path).collect();
        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, segment) in pattern.iter().zip(actual.iter()) {
            match expected.strip_prefix(':') {
                Some(name) if !segment.is_empty() => {
                    params.insert(name.to_string(), segment.to_string());
                }
                Some(_) => return None,
                None if expected == segment => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// Splits a location into path segments, ignoring query, fragment and a
/// single trailing slash.
fn segments(location: &str) -> impl Iterator<Item = &str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    let root = path == "/" || path.is_empty();
    path.trim_start_matches('/')
        .split('/')
        .filter(move |_| !root)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
}

/// RouteMatch
///
/// A resolved location: the entry it matched and the parameters captured
/// from it (e.g. `id` for `/products/:id`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteEntry,
    pub params: BTreeMap<String, String>,
}

/// RouteTable
///
/// Immutable once built. Path strings are unique.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].iter().any(|seen| seen.path == entry.path) {
                return Err(RouteError::DuplicatePath(entry.path.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// The application's route table: public pages followed by admin pages.
    pub fn standard() -> Result<Self, RouteError> {
        let mut entries = public::public_routes();
        entries.extend(admin::admin_routes());
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry, in declaration order, whose pattern matches `location`.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        self.entries.iter().find_map(|route| {
            route
                .matches(location)
                .map(|params| RouteMatch { route, params })
        })
    }
}

/// Navigation
///
/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation<'a> {
    Proceed(RouteMatch<'a>),
    Redirect(&'static str),
    NotFound,
}

/// Router
///
/// Route table plus the guard that runs before every navigation.
pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
}

impl Router {
    pub fn new(table: RouteTable, guard: NavigationGuard) -> Self {
        Self { table, guard }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves `location` and runs the guard against the matched route.
    /// Unmatched locations carry no route metadata, so the guard is skipped.
    pub fn navigate(&self, location: &str) -> Navigation<'_> {
        let Some(matched) = self.table.resolve(location) else {
            tracing::debug!(location, "no route matches");
            return Navigation::NotFound;
        };

        match self.guard.check(matched.route) {
            GuardDecision::Proceed => Navigation::Proceed(matched),
            GuardDecision::Redirect(target) => Navigation::Redirect(target),
        }
    }
}
