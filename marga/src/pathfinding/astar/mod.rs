//! A* pathfinding algorithm.
//!
//! Implements A* search on a [`NavigationGrid`] with:
//! - Integer octile costs (10 straight, 14 diagonal)
//! - An indexed binary heap as the open set, ties broken on the heuristic
//! - Per-run search records, so the grid is only borrowed

mod node;
mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{
    AStarConfig, DIAGONAL_COST, PathFailure, PathResult, STRAIGHT_COST, SearchOutcome,
    octile_distance,
};

use crate::core::WorldPoint;
use crate::grid::NavigationGrid;

/// Quick path finding with default configuration
pub fn compute_path<G>(grid: &G, start: WorldPoint, target: WorldPoint) -> PathResult
where
    G: NavigationGrid + ?Sized,
{
    AStarPlanner::with_defaults(grid).find_path_world(start, target)
}

/// Check if a path exists between two world positions
pub fn path_exists<G>(grid: &G, start: WorldPoint, target: WorldPoint) -> bool
where
    G: NavigationGrid + ?Sized,
{
    AStarPlanner::new(grid, AStarConfig::default().without_simplify())
        .find_path_world(start, target)
        .success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use crate::grid::{GridConfig, NavGrid, NodeId};

    fn create_test_grid() -> NavGrid {
        let config = GridConfig::new(50, 50, 0.1).with_origin(WorldPoint::ZERO);
        NavGrid::new(&config).unwrap()
    }

    fn id(grid: &NavGrid, x: i32, y: i32) -> NodeId {
        grid.coord_to_index(GridCoord::new(x, y)).unwrap()
    }

    fn coords(grid: &NavGrid, path: &[NodeId]) -> Vec<GridCoord> {
        path.iter().map(|&n| grid.node(n).coord).collect()
    }

    #[test]
    fn test_simple_path() {
        let grid = create_test_grid();
        let planner = AStarPlanner::with_defaults(&grid);

        let outcome = planner.find_path(id(&grid, 10, 25), id(&grid, 40, 25));

        assert!(outcome.success());
        let path = coords(&grid, &outcome.path);
        assert_eq!(path[0], GridCoord::new(10, 25));
        assert_eq!(*path.last().unwrap(), GridCoord::new(40, 25));
        assert_eq!(path.len(), 31);
        assert_eq!(outcome.cost, 300);
    }

    #[test]
    fn test_path_steps_are_adjacent() {
        let grid = create_test_grid();
        let planner = AStarPlanner::with_defaults(&grid);

        let outcome = planner.find_path(id(&grid, 3, 7), id(&grid, 41, 30));
        let path = coords(&grid, &outcome.path);

        assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
        let summed: u32 = path.windows(2).map(|w| octile_distance(w[0], w[1])).sum();
        assert_eq!(summed, outcome.cost);
        assert_eq!(
            outcome.cost,
            octile_distance(GridCoord::new(3, 7), GridCoord::new(41, 30))
        );
    }

    #[test]
    fn test_path_around_obstacle() {
        let mut grid = create_test_grid();

        // Add a wall across the middle
        for y in 15..35 {
            grid.set_walkable(GridCoord::new(25, y), false);
        }

        let planner = AStarPlanner::with_defaults(&grid);
        let outcome = planner.find_path(id(&grid, 10, 25), id(&grid, 40, 25));

        assert!(outcome.success());
        // Path should go around the wall
        assert!(outcome.cost > 300);
        let path = coords(&grid, &outcome.path);
        assert!(path.iter().all(|c| grid.is_walkable(*c)));
    }

    #[test]
    fn test_no_path() {
        let mut grid = create_test_grid();

        // Add a complete wall barrier
        for y in 0..50 {
            grid.set_walkable(GridCoord::new(25, y), false);
        }

        let planner = AStarPlanner::with_defaults(&grid);
        let outcome = planner.find_path(id(&grid, 10, 25), id(&grid, 40, 25));

        assert!(!outcome.success());
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.failure_reason, Some(PathFailure::NoPath));
        // Everything left of the wall was expanded
        assert_eq!(outcome.nodes_expanded, 25 * 50);
    }

    #[test]
    fn test_start_blocked() {
        let mut grid = create_test_grid();
        grid.set_walkable(GridCoord::new(10, 25), false);

        let planner = AStarPlanner::with_defaults(&grid);
        let outcome = planner.find_path(id(&grid, 10, 25), id(&grid, 40, 25));

        assert_eq!(outcome.failure_reason, Some(PathFailure::StartBlocked));
        assert_eq!(outcome.nodes_expanded, 0);
    }

    #[test]
    fn test_goal_blocked() {
        let mut grid = create_test_grid();
        grid.set_walkable(GridCoord::new(40, 25), false);

        let planner = AStarPlanner::with_defaults(&grid);
        let outcome = planner.find_path(id(&grid, 10, 25), id(&grid, 40, 25));

        assert_eq!(outcome.failure_reason, Some(PathFailure::GoalBlocked));
        assert_eq!(outcome.nodes_expanded, 0);
    }

    #[test]
    fn test_4_connected_path() {
        let config = GridConfig::new(50, 50, 0.1).with_diagonal(false);
        let grid = NavGrid::new(&config).unwrap();
        let planner = AStarPlanner::with_defaults(&grid);

        let outcome = planner.find_path(id(&grid, 10, 10), id(&grid, 40, 40));

        assert!(outcome.success());
        // Manhattan length: dx + dy = 60 steps
        assert_eq!(outcome.path.len(), 61);
        assert_eq!(outcome.cost, 600);
    }

    #[test]
    fn test_start_equals_target() {
        let grid = create_test_grid();
        let start = WorldPoint::new(1.23, 2.34);
        let result = compute_path(&grid, start, WorldPoint::new(1.27, 2.31));

        assert!(result.success);
        assert_eq!(result.cost, 0);
        assert_eq!(result.path_grid.len(), 1);
        assert_eq!(result.waypoints.len(), 1);
    }

    #[test]
    fn test_world_coordinates() {
        let grid = create_test_grid();

        let start = WorldPoint::new(1.05, 2.55);
        let goal = WorldPoint::new(4.05, 2.55);
        let result = compute_path(&grid, start, goal);

        assert!(result.success);
        // Straight run collapses to the target cell
        assert_eq!(result.waypoints.len(), 1);
        let last = result.waypoints[0];
        assert!(last.distance(&goal) < 0.1);
        assert!((result.length_world(start) - 3.0).abs() < 0.1);
    }

    #[test]
    fn test_without_simplify_keeps_every_cell() {
        let grid = create_test_grid();
        let planner = AStarPlanner::new(&grid, AStarConfig::default().without_simplify());

        let start = WorldPoint::new(0.55, 0.55);
        let result = planner.find_path_world(start, WorldPoint::new(1.55, 0.55));

        assert!(result.success);
        assert_eq!(result.path_grid.len(), 11);
        assert_eq!(result.waypoints.len(), 10);
    }

    #[test]
    fn test_out_of_bounds_without_clamp() {
        let mut config = GridConfig::new(10, 10, 1.0).with_origin(WorldPoint::ZERO);
        config.clamp_to_bounds = false;
        let grid = NavGrid::new(&config).unwrap();

        let outside = WorldPoint::new(-1.0, 0.5);
        let inside = WorldPoint::new(5.5, 5.5);
        let result = compute_path(&grid, outside, inside);

        assert!(!result.success);
        assert!(result.waypoints.is_empty());
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));
        assert!(!path_exists(&grid, outside, inside));
        assert!(path_exists(&grid, inside, WorldPoint::new(0.5, 0.5)));
    }

    #[test]
    fn test_max_iterations() {
        let grid = create_test_grid();
        let planner = AStarPlanner::new(&grid, AStarConfig::with_max_iterations(5));

        let outcome = planner.find_path(id(&grid, 0, 0), id(&grid, 49, 49));

        assert_eq!(
            outcome.failure_reason,
            Some(PathFailure::MaxIterationsExceeded)
        );
        assert_eq!(outcome.nodes_expanded, 5);
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn test_search_does_not_leak_between_runs() {
        let mut grid = create_test_grid();
        for y in 0..49 {
            grid.set_walkable(GridCoord::new(25, y), false);
        }
        let planner = AStarPlanner::with_defaults(&grid);

        let first = planner.find_path(id(&grid, 10, 10), id(&grid, 40, 10));
        let second = planner.find_path(id(&grid, 10, 10), id(&grid, 40, 10));
        assert_eq!(first, second);
    }
}
