//! Waypoint reduction.
//!
//! A raw grid path lists every cell it crosses. Robots and game agents only
//! need the cells where the heading changes, plus the destination:
//!
//! ```text
//!   start  ·  ·  ·  A          kept: A (turn), T (target)
//!                    ·
//!                     ·
//!                      T
//! ```
//!
//! The input is anchored: its first cell is the start, which is used to
//! compute the first heading but is never emitted. Headings are compared
//! after reducing by their gcd, so a list that was already simplified
//! reduces to itself.

use crate::core::GridCoord;

/// Indices into `cells` of the cells kept as waypoints.
///
/// Index 0 (the anchor) is never returned unless the path is a single cell.
/// The last index is always returned for a non-empty path.
pub fn waypoint_indices(cells: &[GridCoord]) -> Vec<usize> {
    let n = cells.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        _ => {}
    }

    let mut indices = Vec::new();
    for i in 1..n - 1 {
        let incoming = cells[i - 1].direction_to(&cells[i]);
        let outgoing = cells[i].direction_to(&cells[i + 1]);
        if incoming != outgoing {
            indices.push(i);
        }
    }
    indices.push(n - 1);
    indices
}

/// Reduce an anchored path to its turn cells and target
pub fn simplify_path(cells: &[GridCoord]) -> Vec<GridCoord> {
    waypoint_indices(cells).into_iter().map(|i| cells[i]).collect()
}

/// Expand waypoints back into a dense cell path starting at `anchor`.
///
/// Each leg is walked one reduced step at a time, so straight and diagonal
/// legs reproduce every cell the unsimplified path crossed. The anchor is the
/// first element of the result.
pub fn waypoints_to_cells(anchor: GridCoord, waypoints: &[GridCoord]) -> Vec<GridCoord> {
    let mut cells = vec![anchor];
    let mut current = anchor;

    for &waypoint in waypoints {
        let step = current.direction_to(&waypoint);
        if step == GridCoord::ZERO {
            continue;
        }
        while current != waypoint {
            current = current + step;
            cells.push(current);
        }
    }

    cells
}
