//! # Marga: Grid A* Route Planning
//!
//! Computes walkable routes across a bounded grid and returns them as a short
//! list of waypoints (the cells where the heading changes, plus the target)
//! instead of every visited cell.
//!
//! ## Features
//!
//! - **Integer octile costs**: 10 per straight step, 14 per diagonal step
//! - **Indexed open set**: binary heap with O(1) membership and in-place
//!   priority decrease
//! - **Shared grids**: searches only borrow the grid, so any number can run
//!   concurrently over one map
//! - **Request queue**: optional worker thread answering requests in order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::{NavGrid, WorldPoint, compute_path};
//!
//! let grid = NavGrid::from_ascii(
//!     "
//!     .....
//!     .###.
//!     .....
//!     ",
//!     1.0,
//! )?;
//!
//! let result = compute_path(&grid, WorldPoint::new(0.5, 0.5), WorldPoint::new(4.5, 2.5));
//! if result.success {
//!     for waypoint in &result.waypoints {
//!         println!("({:.1}, {:.1})", waypoint.x, waypoint.y);
//!     }
//! }
//! # Ok::<(), marga::MargaError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Coordinate types (GridCoord, WorldPoint)
//! - [`heap`]: Indexed min-heap used as the open set
//! - [`grid`]: Grid collaborator trait and the rectangular [`NavGrid`]
//! - [`pathfinding`]: A* search, path retracing, waypoint simplification
//! - [`request`]: FIFO request queue with an optional worker thread
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   start, target (world)
//!            │ resolve_cell()
//!            ▼
//!   ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//!   │   A* search     │────▶│  retrace_path   │────▶│  simplify_path  │
//!   │ (IndexedMinHeap)│     │ (start→target)  │     │ (turns + target)│
//!   └─────────────────┘     └─────────────────┘     └────────┬────────┘
//!                                                            ▼
//!                                                   PathResult { waypoints }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod heap;
pub mod pathfinding;
pub mod request;

pub use config::{ConfigError, MargaConfig};
pub use crate::core::{GridCoord, WorldPoint};
pub use error::{MargaError, Result};
pub use grid::{GridConfig, NavGrid, NavigationGrid, Node, NodeId};
pub use heap::{HeapStore, IndexedMinHeap};
pub use pathfinding::{
    AStarConfig, AStarPlanner, PathFailure, PathResult, SearchOutcome, compute_path, path_exists,
    simplify_path,
};
pub use request::{PathRequestConfig, PathRequestId, PathRequestManager, PathResponse};
