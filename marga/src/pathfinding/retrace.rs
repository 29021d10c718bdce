//! Path reconstruction from parent links.

use crate::grid::NodeId;

/// Follow parent links from `target` back to `start`.
///
/// Returns the node ids in start→target order, both ends included. The walk
/// visits at most `max_len` nodes; a chain that is longer, dead-ends before
/// reaching `start`, or loops is reported as `None`.
pub fn retrace_path<F>(
    start: NodeId,
    target: NodeId,
    max_len: usize,
    parent: F,
) -> Option<Vec<NodeId>>
where
    F: Fn(NodeId) -> Option<NodeId>,
{
    let mut path = Vec::new();
    let mut current = target;

    loop {
        if path.len() >= max_len {
            return None;
        }
        path.push(current);
        if current == start {
            break;
        }
        current = parent(current)?;
    }

    path.reverse();
    Some(path)
}
