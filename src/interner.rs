use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

/// Deduplicates parameter names across routes. Many routes share the same
/// handful of names ("id", "slug"), so edges store a `u32` id and the
/// matcher resolves it back only when a match is produced.
#[derive(Debug, Default)]
struct InternerInner {
    map: FastHashMap<Box<str>, u32>,
    rev: Vec<Box<str>>,
}

#[derive(Debug, Default)]
pub(crate) struct Interner {
    inner: RwLock<InternerInner>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn intern(&self, s: &str) -> u32 {
        if let Some(id) = self.inner.read().map.get(s).copied() {
            return id;
        }

        let mut inner = self.inner.write();
        if let Some(&id) = inner.map.get(s) {
            return id;
        }

        let id = inner.rev.len() as u32;
        let boxed = s.to_string().into_boxed_str();
        inner.rev.push(boxed.clone());
        inner.map.insert(boxed, id);
        id
    }

    #[inline]
    pub fn resolve(&self, id: u32) -> Option<Box<str>> {
        self.inner.read().rev.get(id as usize).cloned()
    }
}
