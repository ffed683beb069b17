mod resolver;

pub(crate) use resolver::{resolve, CaptureList};

use crate::enums::Method;
use crate::trie::{RouteId, Trie};

/// Captured parameters in declaration order (left to right in the pattern).
/// Values are byte-exact copies of the matched path spans; no decoding or
/// escaping is applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(Box<str>, String)>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A successful resolution of a path (+ method) to one registered route.
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    pub(crate) route: RouteId,
    pub(crate) method: Method,
    pub(crate) pattern: &'r str,
    pub(crate) payload: Option<&'r T>,
    pub(crate) params: Params,
}

impl<'r, T> RouteMatch<'r, T> {
    pub fn route_key(&self) -> RouteId {
        self.route
    }

    /// The method class the route was registered under, which may be `Any`
    /// or a different class than the one requested. Callers distinguishing
    /// "matched a different method" from "matched" compare this against
    /// their request themselves.
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn pattern(&self) -> &'r str {
        self.pattern
    }

    pub fn payload(&self) -> Option<&'r T> {
        self.payload
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

/// The two match outcomes kept deliberately separate: whether any route
/// structurally matches the path, and whether one of those routes also
/// admits the requested method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchProbe {
    pub path_matched: bool,
    pub method_matched: bool,
}

pub(crate) fn captures_to_params<T>(trie: &Trie<T>, path: &str, captures: CaptureList) -> Params {
    let mut entries = Vec::with_capacity(captures.len());
    for (name_id, (start, len)) in captures {
        let end = start + len;
        let Some(name) = trie.interner().resolve(name_id) else {
            continue;
        };
        if let Some(value) = path.get(start..end) {
            entries.push((name, value.to_string()));
        }
    }
    Params { entries }
}
