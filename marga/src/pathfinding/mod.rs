//! Path planning on a navigation grid.
//!
//! - **A* Search**: cheapest 8- or 4-connected route between two cells
//! - **Retrace**: parent links back to an ordered cell list
//! - **Simplify**: collapse straight runs to their final cell
//!
//! ## A* Pathfinding
//!
//! ```rust,ignore
//! use marga::pathfinding::{AStarConfig, AStarPlanner};
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//!
//! let result = planner.find_path_world(start, goal);
//! if result.success {
//!     println!("Path found with {} waypoints", result.waypoints.len());
//! }
//! ```

pub mod astar;
pub mod retrace;
pub mod simplify;

pub use astar::{
    AStarConfig, AStarPlanner, DIAGONAL_COST, PathFailure, PathResult, STRAIGHT_COST,
    SearchOutcome, compute_path, octile_distance, path_exists,
};
pub use retrace::retrace_path;
pub use simplify::{simplify_path, waypoint_indices, waypoints_to_cells};
