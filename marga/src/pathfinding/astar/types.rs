//! A* pathfinding types.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::NodeId;

/// Cost of an axis-aligned step (fixed-point, ×10)
pub const STRAIGHT_COST: u32 = 10;

/// Cost of a diagonal step (≈ 10·√2)
pub const DIAGONAL_COST: u32 = 14;

/// Octile distance between two cells.
///
/// Used both as the heuristic and as the step cost between adjacent cells,
/// where it yields [`STRAIGHT_COST`] or [`DIAGONAL_COST`].
#[inline]
pub fn octile_distance(a: GridCoord, b: GridCoord) -> u32 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    DIAGONAL_COST * dx.min(dy) + STRAIGHT_COST * dx.abs_diff(dy)
}

/// A* pathfinding configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up (None = unlimited)
    pub max_iterations: Option<usize>,
    /// Reduce the path to direction-change waypoints
    pub simplify: bool,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            simplify: true,
        }
    }
}

impl AStarConfig {
    /// Bound the search to `max_iterations` expansions
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..Default::default()
        }
    }

    /// Keep every cell of the path as a waypoint
    pub fn without_simplify(mut self) -> Self {
        self.simplify = false;
        self
    }
}

/// Raw output of a grid search, before conversion to waypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Node ids from start to target inclusive (empty on failure)
    pub path: Vec<NodeId>,
    /// g-cost at the target
    pub cost: u32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (None on success)
    pub failure_reason: Option<PathFailure>,
}

impl SearchOutcome {
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: 0,
            nodes_expanded,
            failure_reason: Some(reason),
        }
    }

    /// Whether a path was found
    #[inline]
    pub fn success(&self) -> bool {
        self.failure_reason.is_none()
    }
}

/// Result of a world-space path query
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Whether a path was found
    pub success: bool,
    /// Cell centers of the waypoints, start excluded, target last
    pub waypoints: Vec<WorldPoint>,
    /// Full path as grid coordinates, start to target (empty if no path found)
    pub path_grid: Vec<GridCoord>,
    /// Total path cost (0 on failure)
    pub cost: u32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            success: false,
            waypoints: Vec::new(),
            path_grid: Vec::new(),
            cost: 0,
            nodes_expanded,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path_grid.len()
    }

    /// Length of the waypoint polyline in world units, measured from `start`
    pub fn length_world(&self, start: WorldPoint) -> f32 {
        let mut previous = start;
        let mut total = 0.0;
        for point in &self.waypoints {
            total += previous.distance(point);
            previous = *point;
        }
        total
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start position is not walkable
    StartBlocked,
    /// Goal position is not walkable
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
    /// Start or goal is outside a non-clamping grid
    OutOfBounds,
}
