use bitflags::bitflags;
use regex::bytes::Regex;
use smallvec::SmallVec;
use std::sync::Arc;

use crate::trie::RouteId;

pub(crate) type NodeId = u32;
pub(crate) const ROOT: NodeId = 0;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct TreeFlags: u8 {
        const COMPILED = 0b0000_0001;
        const DIRTY    = 0b0000_0010;
    }
}

/// One complete pattern ending at a node, keyed by method code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Terminal {
    pub method_code: u16,
    pub route: RouteId,
}

/// The single parameter transition a node may carry. The capture never
/// crosses `/`; a constraint narrows it further.
#[derive(Debug, Clone)]
pub(crate) struct ParamEdge {
    pub name_id: u32,
    pub constraint_raw: Option<Box<str>>,
    pub constraint: Option<Arc<Regex>>,
    pub child: NodeId,
}

/// One shared prefix position. `prefix` is the literal byte run that
/// distinguishes this node from its siblings; edge splitting may cut it
/// mid-character, so it is kept as raw bytes rather than `str`.
///
/// `child_keys[i]` is the first byte of `children[i]`'s prefix. Insert keeps
/// the two vectors aligned in arrival order; compile() sorts them so lookup
/// can binary-search.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    pub prefix: Box<[u8]>,
    pub child_keys: SmallVec<[u8; 8]>,
    pub children: SmallVec<[NodeId; 8]>,
    pub param: Option<ParamEdge>,
    pub terminals: SmallVec<[Terminal; 2]>,
}

impl TrieNode {
    pub fn with_prefix(prefix: &[u8]) -> Self {
        Self {
            prefix: prefix.to_vec().into_boxed_slice(),
            ..Default::default()
        }
    }

    pub fn child_position(&self, byte: u8) -> Option<usize> {
        self.child_keys.iter().position(|&key| key == byte)
    }

    /// Binary search over the compile()-sorted dispatch keys.
    #[inline]
    pub fn dispatch(&self, byte: u8) -> Option<NodeId> {
        self.child_keys
            .binary_search(&byte)
            .ok()
            .map(|pos| self.children[pos])
    }
}
