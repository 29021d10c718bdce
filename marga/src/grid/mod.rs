//! Navigation grid: the cells the planner searches over.
//!
//! The planner never builds or samples terrain itself. It talks to a grid
//! through the [`NavigationGrid`] trait, which resolves world positions to
//! cells, reports walkability and enumerates neighbors. [`NavGrid`] is the
//! rectangular implementation shipped with the crate.
//!
//! ## Cells and ids
//!
//! Cells live in an arena owned by the grid and are addressed by [`NodeId`],
//! a dense index below [`NavigationGrid::max_cell_count`]. The planner keeps
//! its per-run costs and parent links in a separate array indexed by the same
//! ids, so a grid can be shared (`&G`) by any number of concurrent searches.
//!
//! ```text
//!   grid (shared, immutable during search)     search run (owned, scratch)
//!   ┌──────────────────────────────┐           ┌────────────────────────┐
//!   │ Node { coord, world, walk }  │◄── id ───►│ SearchNode { g, h, .. }│
//!   └──────────────────────────────┘           └────────────────────────┘
//! ```

mod config;
mod nav_grid;

pub use config::GridConfig;
pub use nav_grid::NavGrid;

use crate::core::{GridCoord, WorldPoint};

/// Dense cell index into a grid's node arena.
pub type NodeId = usize;

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Cell coordinates within the grid
    pub coord: GridCoord,
    /// Cell center in world coordinates
    pub world: WorldPoint,
    /// Can an agent stand in this cell?
    pub walkable: bool,
}

impl Node {
    /// Create a new node
    pub fn new(coord: GridCoord, world: WorldPoint, walkable: bool) -> Self {
        Self {
            coord,
            world,
            walkable,
        }
    }
}

/// Grid provider consumed by the planner.
pub trait NavigationGrid {
    /// Map a world position to the cell containing it.
    ///
    /// Returns `None` when the position lies outside a grid that does not
    /// clamp to its bounds.
    fn resolve_cell(&self, point: WorldPoint) -> Option<NodeId>;

    /// Cell data for an id obtained from this grid.
    fn node(&self, id: NodeId) -> &Node;

    /// Append the cells adjacent to `id` to `out`.
    ///
    /// Out-of-bounds cells and `id` itself are never reported. Walkability is
    /// not filtered here; the planner checks it.
    fn neighbors(&self, id: NodeId, out: &mut Vec<NodeId>);

    /// Upper bound on every id this grid hands out.
    fn max_cell_count(&self) -> usize;
}
