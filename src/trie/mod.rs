use hashbrown::HashMap as FastHashMap;
use regex::bytes::Regex;
use std::sync::Arc;

use crate::enums::Method;
use crate::interner::Interner;

mod compile;
mod error;
mod insert;
pub(crate) mod node;

pub use error::{TrieError, TrieResult};

pub(crate) use node::{NodeId, ROOT};

use node::{TreeFlags, TrieNode};

/// Route keys are dense `u16` indices into the route store.
pub type RouteId = u16;

pub const MAX_ROUTES: u16 = u16::MAX;

#[derive(Debug)]
pub(crate) struct RouteRecord<T> {
    pub pattern: Box<str>,
    pub method: Method,
    pub payload: Option<T>,
}

/// The shared prefix tree plus everything compile() derives from it.
///
/// Nodes live in an index-addressed arena, so splitting an edge is a matter
/// of reassigning child indices rather than rewiring ownership.
#[derive(Debug)]
pub(crate) struct Trie<T> {
    arena: Vec<TrieNode>,
    routes: Vec<RouteRecord<T>>,
    interner: Interner,
    constraint_cache: FastHashMap<Box<str>, Arc<Regex>>,
    static_map: FastHashMap<Box<[u8]>, NodeId>,
    flags: TreeFlags,
    enable_static_map: bool,
}

impl<T> Trie<T> {
    pub fn new(capacity_hint: usize, enable_static_map: bool) -> Self {
        let mut arena = Vec::with_capacity(capacity_hint.saturating_mul(4).max(1));
        arena.push(TrieNode::default());
        Self {
            arena,
            routes: Vec::with_capacity(capacity_hint),
            interner: Interner::new(),
            constraint_cache: FastHashMap::new(),
            static_map: FastHashMap::new(),
            flags: TreeFlags::empty(),
            enable_static_map,
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.arena[id as usize]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.arena[id as usize]
    }

    pub(crate) fn alloc(&mut self, prefix: &[u8]) -> NodeId {
        let id = self.arena.len() as NodeId;
        self.arena.push(TrieNode::with_prefix(prefix));
        id
    }

    #[inline]
    pub fn route(&self, id: RouteId) -> &RouteRecord<T> {
        &self.routes[id as usize]
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Matchable: compiled at least once and no insertions since.
    pub fn is_ready(&self) -> bool {
        self.flags.contains(TreeFlags::COMPILED) && !self.flags.contains(TreeFlags::DIRTY)
    }

    #[inline]
    pub(crate) fn static_lookup(&self, path: &[u8]) -> Option<NodeId> {
        self.static_map.get(path).copied()
    }

    #[inline]
    pub(crate) fn interner(&self) -> &Interner {
        &self.interner
    }
}
