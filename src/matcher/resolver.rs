use memchr::memchr;
use smallvec::SmallVec;

use crate::enums::ANY_CODE;
use crate::trie::node::Terminal;
use crate::trie::{NodeId, RouteId, Trie, ROOT};

/// (interned parameter name, (byte offset, byte length)) into the input path.
pub(crate) type Capture = (u32, (usize, usize));
pub(crate) type CaptureList = SmallVec<[Capture; 4]>;

/// One backtracking choice point. `next_candidate` is the next capture end
/// to try for the parameter edge; 0 means the parameter phase has not
/// started yet.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    pos: usize,
    caps: usize,
    tried_literal: bool,
    next_candidate: usize,
}

/// Walks the compiled trie against `path`.
///
/// Literal transitions are always tried before the parameter edge, and
/// parameter spans are explored shortest-first, so the most specific route
/// wins every tie. The search is an explicit stack machine; depth is bounded
/// by the path length, never by the call stack.
///
/// `method` of `None` asks for a purely structural match: the first terminal
/// at a fully-consumed node is accepted regardless of method class.
pub(crate) fn resolve<T>(
    trie: &Trie<T>,
    method: Option<u16>,
    path: &str,
) -> Option<(RouteId, CaptureList)> {
    let bytes = path.as_bytes();

    // Full-path shortcut for literal-only routes. A miss here (wrong method
    // class) still falls through: a parameter route may cover the same text.
    if let Some(node) = trie.static_lookup(bytes)
        && let Some(route) = select_terminal(&trie.node(node).terminals, method)
    {
        return Some((route, SmallVec::new()));
    }

    let mut captures: CaptureList = SmallVec::new();
    let mut stack: Vec<Frame> = Vec::with_capacity(8);
    stack.push(Frame {
        node: ROOT,
        pos: 0,
        caps: 0,
        tried_literal: false,
        next_candidate: 0,
    });

    'search: while !stack.is_empty() {
        let top = stack.len() - 1;
        let frame = stack[top];
        let node = trie.node(frame.node);

        if !frame.tried_literal {
            stack[top].tried_literal = true;

            if frame.pos == bytes.len() {
                if let Some(route) = select_terminal(&node.terminals, method) {
                    return Some((route, captures));
                }
                stack.pop();
                captures.truncate(frame.caps);
                continue;
            }

            if let Some(child) = node.dispatch(bytes[frame.pos]) {
                let prefix = &trie.node(child).prefix;
                if bytes[frame.pos..].starts_with(prefix) {
                    stack.push(Frame {
                        node: child,
                        pos: frame.pos + prefix.len(),
                        caps: captures.len(),
                        tried_literal: false,
                        next_candidate: 0,
                    });
                    continue;
                }
            }
        }

        if let Some(edge) = node.param.as_ref()
            && frame.pos < bytes.len()
        {
            // Captures are non-empty and never cross a slash.
            let window_end = frame.pos
                + memchr(b'/', &bytes[frame.pos..]).unwrap_or(bytes.len() - frame.pos);
            let mut end = if frame.next_candidate == 0 {
                frame.pos + 1
            } else {
                frame.next_candidate
            };

            while end <= window_end {
                let accepted = edge
                    .constraint
                    .as_deref()
                    .is_none_or(|regex| regex.is_match(&bytes[frame.pos..end]));
                if accepted {
                    stack[top].next_candidate = end + 1;
                    captures.truncate(frame.caps);
                    captures.push((edge.name_id, (frame.pos, end - frame.pos)));
                    stack.push(Frame {
                        node: edge.child,
                        pos: end,
                        caps: captures.len(),
                        tried_literal: false,
                        next_candidate: 0,
                    });
                    continue 'search;
                }
                end += 1;
            }
        }

        stack.pop();
        captures.truncate(frame.caps);
    }

    None
}

/// Terminal tie-break: a method-specific entry beats `Any`; `Any` as the
/// requested class takes whatever is registered. A terminal that satisfies
/// neither fails the whole terminal, and the search backtracks.
fn select_terminal(terminals: &[Terminal], method: Option<u16>) -> Option<RouteId> {
    let selected = match method {
        None => terminals.first(),
        Some(ANY_CODE) => terminals
            .iter()
            .find(|terminal| terminal.method_code == ANY_CODE)
            .or_else(|| terminals.first()),
        Some(code) => terminals
            .iter()
            .find(|terminal| terminal.method_code == code)
            .or_else(|| {
                terminals
                    .iter()
                    .find(|terminal| terminal.method_code == ANY_CODE)
            }),
    };
    selected.map(|terminal| terminal.route)
}
