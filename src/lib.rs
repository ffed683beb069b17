//! A compiled prefix-trie URL router.
//!
//! Patterns like `/users/{id}` or `/files/{name:[a-z0-9]+}` are inserted
//! into a shared byte-level prefix tree, compiled once, and then matched
//! read-only against request paths. Each route carries an opaque payload
//! that comes back with the match, along with the captured parameters in
//! declaration order.
//!
//! ```
//! use prefix_router_rs::{Method, Router};
//!
//! let mut router = Router::new();
//! router.add(Method::Get, "/users/{id}", Some("user handler")).unwrap();
//! router.compile().unwrap();
//!
//! let found = router.find(Method::Get, "/users/42").unwrap().unwrap();
//! assert_eq!(found.payload(), Some(&"user handler"));
//! assert_eq!(found.params().get("id"), Some("42"));
//! ```
//!
//! The intended discipline is build-then-share: sequential `add` calls, one
//! `compile`, then the router is read-only and safe to match from many
//! threads (`find` takes `&self` and never mutates). Inserting again marks
//! the matcher stale until the next `compile`.

pub mod enums;
pub mod errors;
mod interner;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod trie;

pub use enums::Method;
pub use errors::{RouterError, RouterResult};
pub use matcher::{MatchProbe, Params, RouteMatch};
pub use trie::{RouteId, TrieError, MAX_ROUTES};

use crate::pattern::parse_pattern;
use crate::trie::Trie;

/// Default capacity hint when none is given.
pub const DEFAULT_CAPACITY_HINT: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// Apply `path::chomp_trailing_slash` to registration and request paths.
    /// The trie itself never normalizes; this keeps both sides consistent.
    pub chomp_trailing_slash: bool,
    /// Build the full-path lookup table for literal-only routes at compile.
    pub enable_static_full_map: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            chomp_trailing_slash: true,
            enable_static_full_map: true,
        }
    }
}

/// Owner of one route trie. Insert-compile-match lifecycle; `release`
/// tears the trie down early and turns every later call into an error.
#[derive(Debug)]
pub struct Router<T> {
    trie: Option<Trie<T>>,
    options: RouterOptions,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            trie: Some(Trie::new(
                DEFAULT_CAPACITY_HINT,
                options.enable_static_full_map,
            )),
            options,
        }
    }

    /// `hint` pre-reserves storage and has no behavioral effect. Zero is a
    /// range error, matching the original binding contract.
    pub fn with_capacity(hint: usize) -> RouterResult<Self> {
        Self::with_capacity_and_options(hint, RouterOptions::default())
    }

    pub fn with_capacity_and_options(hint: usize, options: RouterOptions) -> RouterResult<Self> {
        if hint == 0 {
            return Err(RouterError::InvalidCapacity { given: hint });
        }
        Ok(Self {
            trie: Some(Trie::new(hint, options.enable_static_full_map)),
            options,
        })
    }

    /// Registers `path` under `method`. Returns the route key; registering
    /// an identical (pattern, method) pair again replaces the payload and
    /// returns the existing key. Any error leaves match behavior unchanged.
    #[tracing::instrument(level = "trace", skip(self, payload), fields(method = ?method, path = %path))]
    pub fn add(&mut self, method: Method, path: &str, payload: Option<T>) -> RouterResult<RouteId> {
        let options = self.options;
        let trie = Self::live_mut(&mut self.trie, "add")?;

        let path = path::require_non_empty(path)?;
        let path = if options.chomp_trailing_slash {
            path::chomp_trailing_slash(path)
        } else {
            path
        };

        let segments = parse_pattern(path)?;
        Ok(trie.insert(method, path, &segments, payload)?)
    }

    /// Method-agnostic registration (the original binding's one-argument
    /// `add`).
    pub fn add_path(&mut self, path: &str, payload: Option<T>) -> RouterResult<RouteId> {
        self.add(Method::Any, path, payload)
    }

    /// Builds the dispatch acceleration state and returns the number of
    /// registered routes. Must run after the last `add` before matching.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn compile(&mut self) -> RouterResult<usize> {
        let trie = Self::live_mut(&mut self.trie, "compile")?;
        Ok(trie.compile()?)
    }

    /// Resolves `path` to the best-matching route for `method`.
    ///
    /// `Ok(None)` is the normal negative result. A route registered under
    /// `Any` is returned even when a specific method was requested and has
    /// no entry of its own; check [`RouteMatch::method`] to tell the cases
    /// apart, or use [`Router::probe`].
    #[tracing::instrument(level = "trace", skip(self), fields(method = ?method, path = %path))]
    pub fn find(&self, method: Method, path: &str) -> RouterResult<Option<RouteMatch<'_, T>>> {
        let trie = self.ready_trie("find")?;
        let path = self.request_path(path)?;

        let Some((route, captures)) = matcher::resolve(trie, Some(method.code()), path) else {
            return Ok(None);
        };

        let record = trie.route(route);
        Ok(Some(RouteMatch {
            route,
            method: record.method,
            pattern: &record.pattern,
            payload: record.payload.as_ref(),
            params: matcher::captures_to_params(trie, path, captures),
        }))
    }

    /// Answers both match questions separately: does any route cover this
    /// path at all, and does one of them admit the requested method.
    pub fn probe(&self, method: Method, path: &str) -> RouterResult<MatchProbe> {
        let trie = self.ready_trie("probe")?;
        let path = self.request_path(path)?;

        let path_matched = matcher::resolve(trie, None, path).is_some();
        let method_matched =
            path_matched && matcher::resolve(trie, Some(method.code()), path).is_some();
        Ok(MatchProbe {
            path_matched,
            method_matched,
        })
    }

    /// True iff a route matches the path and admits the method.
    pub fn matches(&self, method: Method, path: &str) -> RouterResult<bool> {
        Ok(self.probe(method, path)?.method_matched)
    }

    /// Frees the trie and every route record it owns. True when a live
    /// tree was released, false when already released.
    pub fn release(&mut self) -> bool {
        self.trie.take().is_some()
    }

    pub fn is_released(&self) -> bool {
        self.trie.is_none()
    }

    pub fn is_compiled(&self) -> bool {
        self.trie.as_ref().is_some_and(Trie::is_ready)
    }

    pub fn route_count(&self) -> usize {
        self.trie.as_ref().map_or(0, Trie::route_count)
    }

    fn live_mut<'t>(
        trie: &'t mut Option<Trie<T>>,
        operation: &'static str,
    ) -> RouterResult<&'t mut Trie<T>> {
        trie.as_mut().ok_or(RouterError::Released { operation })
    }

    fn ready_trie(&self, operation: &'static str) -> RouterResult<&Trie<T>> {
        let trie = self
            .trie
            .as_ref()
            .ok_or(RouterError::Released { operation })?;
        if !trie.is_ready() {
            return Err(TrieError::RecompileRequired.into());
        }
        Ok(trie)
    }

    fn request_path<'p>(&self, path: &'p str) -> RouterResult<&'p str> {
        let path = path::require_non_empty(path)?;
        Ok(if self.options.chomp_trailing_slash {
            path::chomp_trailing_slash(path)
        } else {
            path
        })
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
