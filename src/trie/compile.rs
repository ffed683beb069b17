use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::trie::node::{TreeFlags, TrieNode};
use crate::trie::{NodeId, Trie, TrieError, TrieResult, ROOT};

impl<T> Trie<T> {
    /// Post-processes the trie after insertion: orders each node's dispatch
    /// keys for binary search, re-checks the structural invariants insert()
    /// is supposed to uphold, and rebuilds the full-path acceleration map.
    ///
    /// Dispatch sorting is match-equivalent, and the static map is swapped
    /// in only at the end, so a failed compile leaves matching behavior
    /// exactly as it was. Compiling twice with no intervening inserts is a
    /// no-op beyond the route count.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(crate) fn compile(&mut self) -> TrieResult<usize> {
        for id in 0..self.arena.len() {
            sort_dispatch(&mut self.arena[id]);
            verify_dispatch(&self.arena[id], id as NodeId)?;
        }

        self.static_map = if self.enable_static_map {
            self.build_static_map()
        } else {
            FastHashMap::new()
        };

        self.flags.remove(TreeFlags::DIRTY);
        self.flags.insert(TreeFlags::COMPILED);

        tracing::event!(
            tracing::Level::TRACE,
            operation = "compile",
            routes = self.routes.len() as u64,
            nodes = self.arena.len() as u64,
            static_entries = self.static_map.len() as u64
        );
        Ok(self.routes.len())
    }

    /// Full-path shortcut for routes reachable through literal edges alone.
    /// Subtrees behind a parameter edge are skipped; their paths are not
    /// static.
    fn build_static_map(&self) -> FastHashMap<Box<[u8]>, NodeId> {
        let mut map = FastHashMap::new();
        let mut buf: Vec<u8> = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

        while let Some((id, depth)) = stack.pop() {
            buf.truncate(depth);
            let node = &self.arena[id as usize];
            buf.extend_from_slice(&node.prefix);

            if !node.terminals.is_empty() {
                map.insert(buf.clone().into_boxed_slice(), id);
            }

            let child_depth = buf.len();
            for &child in node.children.iter() {
                stack.push((child, child_depth));
            }
        }

        map
    }
}

fn sort_dispatch(node: &mut TrieNode) {
    let len = node.child_keys.len();
    if len < 2 {
        return;
    }

    let mut order: SmallVec<[usize; 8]> = (0..len).collect();
    order.sort_unstable_by_key(|&pos| node.child_keys[pos]);

    let old_keys = std::mem::take(&mut node.child_keys);
    let old_children = std::mem::take(&mut node.children);
    node.child_keys.reserve(len);
    node.children.reserve(len);
    for &pos in order.iter() {
        node.child_keys.push(old_keys[pos]);
        node.children.push(old_children[pos]);
    }
}

/// Two children sharing a first byte means insert() failed to merge them.
/// That is a programming-error class, not a user error, so it fails loudly
/// here rather than misrouting quietly.
fn verify_dispatch(node: &TrieNode, id: NodeId) -> TrieResult<()> {
    for pair in node.child_keys.windows(2) {
        if pair[0] == pair[1] {
            return Err(TrieError::CorruptDispatch {
                byte: pair[0],
                node: id,
            });
        }
    }
    Ok(())
}
