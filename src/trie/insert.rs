use regex::bytes::Regex;
use std::sync::Arc;

use crate::enums::Method;
use crate::pattern::{PatternError, PatternSegment};
use crate::trie::node::{ParamEdge, Terminal, TreeFlags};
use crate::trie::{NodeId, RouteId, RouteRecord, Trie, TrieError, TrieResult, MAX_ROUTES, ROOT};

impl<T> Trie<T> {
    /// Inserts a parsed pattern, merging shared literal prefixes with the
    /// existing structure and splitting edges where prefixes partially
    /// overlap.
    ///
    /// Constraints are compiled before the walk starts, so a rejected
    /// pattern never reaches the arena. A parameter conflict can surface
    /// mid-walk after new nodes were allocated; those nodes carry no
    /// terminal, so match outcomes are unaffected.
    #[tracing::instrument(level = "trace", skip(self, segments, payload), fields(method = ?method, pattern = %pattern))]
    pub(crate) fn insert(
        &mut self,
        method: Method,
        pattern: &str,
        segments: &[PatternSegment],
        payload: Option<T>,
    ) -> TrieResult<RouteId> {
        let mut compiled: Vec<Option<Arc<Regex>>> = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                PatternSegment::Param {
                    name,
                    constraint: Some(raw),
                } => compiled.push(Some(self.compile_constraint(pattern, name, raw)?)),
                _ => compiled.push(None),
            }
        }

        if self.routes.len() >= MAX_ROUTES as usize {
            return Err(TrieError::MaxRoutesExceeded { limit: MAX_ROUTES });
        }

        let mut current = ROOT;
        for (segment, regex) in segments.iter().zip(compiled) {
            current = match segment {
                PatternSegment::Literal(text) => self.descend_literal(current, text.as_bytes()),
                PatternSegment::Param { name, constraint } => {
                    self.descend_param(current, pattern, name, constraint.as_deref(), regex)?
                }
            };
        }

        let key = self.attach_terminal(current, method, pattern, payload);
        self.flags.insert(TreeFlags::DIRTY);

        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            route_key = key as u64,
            nodes = self.node_count() as u64
        );
        Ok(key)
    }

    /// Consumes one literal run, descending through (and creating or
    /// splitting) literal edges until the whole chunk is accounted for.
    fn descend_literal(&mut self, mut node: NodeId, chunk: &[u8]) -> NodeId {
        let mut rest = chunk;
        loop {
            if rest.is_empty() {
                return node;
            }

            let first = rest[0];
            let Some(pos) = self.node(node).child_position(first) else {
                let child = self.alloc(rest);
                let parent = self.node_mut(node);
                parent.child_keys.push(first);
                parent.children.push(child);
                return child;
            };

            let child = self.node(node).children[pos];
            let common = common_prefix_len(&self.node(child).prefix, rest);

            if common == self.node(child).prefix.len() {
                node = child;
                rest = &rest[common..];
                continue;
            }

            // Partial overlap: cut the existing edge at the divergence point
            // and continue below the new branch node.
            node = self.split_edge(node, pos, common);
            rest = &rest[common..];
            if rest.is_empty() {
                return node;
            }
        }
    }

    /// Replaces `parent.children[pos]` with a new node holding the first
    /// `common` bytes of the old edge; the old child keeps the remainder.
    fn split_edge(&mut self, parent: NodeId, pos: usize, common: usize) -> NodeId {
        let child = self.node(parent).children[pos];
        let old_prefix = std::mem::take(&mut self.node_mut(child).prefix);
        let (head, tail) = old_prefix.split_at(common);

        let mid = self.alloc(head);
        self.node_mut(child).prefix = tail.to_vec().into_boxed_slice();

        let mid_node = self.node_mut(mid);
        mid_node.child_keys.push(tail[0]);
        mid_node.children.push(child);

        // same first byte, so the parent's dispatch key is unchanged
        self.node_mut(parent).children[pos] = mid;
        mid
    }

    fn descend_param(
        &mut self,
        node: NodeId,
        pattern: &str,
        name: &str,
        raw: Option<&str>,
        regex: Option<Arc<Regex>>,
    ) -> TrieResult<NodeId> {
        let name_id = self.interner.intern(name);

        if let Some(edge) = self.node(node).param.as_ref() {
            if edge.name_id != name_id || edge.constraint_raw.as_deref() != raw {
                let existing_name = self
                    .interner
                    .resolve(edge.name_id)
                    .unwrap_or_else(|| "?".into());
                return Err(TrieError::ParamConflict {
                    pattern: pattern.to_string(),
                    existing: describe_param(&existing_name, edge.constraint_raw.as_deref()),
                    incoming: describe_param(name, raw),
                });
            }
            return Ok(edge.child);
        }

        let child = self.alloc(b"");
        self.node_mut(node).param = Some(ParamEdge {
            name_id,
            constraint_raw: raw.map(Into::into),
            constraint: regex,
            child,
        });
        Ok(child)
    }

    /// Attaches the route to its terminal node. Re-registering an identical
    /// (pattern, method) pair replaces the payload in place and hands back
    /// the original key.
    fn attach_terminal(
        &mut self,
        node: NodeId,
        method: Method,
        pattern: &str,
        payload: Option<T>,
    ) -> RouteId {
        let code = method.code();
        let existing = self
            .node(node)
            .terminals
            .iter()
            .find(|terminal| terminal.method_code == code)
            .map(|terminal| terminal.route);
        if let Some(key) = existing {
            self.routes[key as usize].payload = payload;
            return key;
        }

        let key = self.routes.len() as RouteId;
        self.routes.push(RouteRecord {
            pattern: pattern.into(),
            method,
            payload,
        });
        self.node_mut(node).terminals.push(Terminal {
            method_code: code,
            route: key,
        });
        key
    }

    /// Anchored compile through the per-tree cache; identical raw fragments
    /// across routes share one compiled regex.
    fn compile_constraint(
        &mut self,
        pattern: &str,
        name: &str,
        raw: &str,
    ) -> TrieResult<Arc<Regex>> {
        if let Some(existing) = self.constraint_cache.get(raw) {
            return Ok(existing.clone());
        }

        let anchored = format!("^(?:{raw})$");
        match Regex::new(&anchored) {
            Ok(regex) => {
                let arc = Arc::new(regex);
                self.constraint_cache
                    .insert(raw.to_string().into_boxed_str(), arc.clone());
                Ok(arc)
            }
            Err(source) => Err(PatternError::InvalidConstraint {
                pattern: pattern.to_string(),
                name: name.to_string(),
                source,
            }
            .into()),
        }
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn describe_param(name: &str, raw: Option<&str>) -> String {
    match raw {
        Some(constraint) => format!("{{{name}:{constraint}}}"),
        None => format!("{{{name}}}"),
    }
}
