//! A* against a brute-force reference on random grids.

mod common;

use common::{dijkstra_cost, path_cost, random_grid, random_walkable};
use marga::pathfinding::simplify_path;
use marga::{AStarPlanner, GridConfig, NavGrid, PathFailure, WorldPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_costs_match_dijkstra() {
    env_logger::try_init().ok();
    let mut rng = StdRng::seed_from_u64(42);
    let mut found = 0;

    for _ in 0..60 {
        let grid = random_grid(&mut rng, 16, 12, 0.3);
        let (Some(start), Some(target)) =
            (random_walkable(&mut rng, &grid), random_walkable(&mut rng, &grid))
        else {
            continue;
        };
        let start_id = grid.coord_to_index(start).unwrap();
        let target_id = grid.coord_to_index(target).unwrap();

        let outcome = AStarPlanner::with_defaults(&grid).find_path(start_id, target_id);
        let reference = dijkstra_cost(&grid, start_id, target_id);

        match reference {
            Some(cost) => {
                assert!(outcome.success(), "A* missed a path {start:?} -> {target:?}");
                assert_eq!(outcome.cost, cost);

                let cells: Vec<_> = outcome
                    .path
                    .iter()
                    .map(|&n| grid.index_to_coord(n))
                    .collect();
                assert_eq!(cells.first(), Some(&start));
                assert_eq!(cells.last(), Some(&target));
                assert_eq!(path_cost(&cells), outcome.cost);
                assert!(cells.iter().all(|c| grid.is_walkable(*c)));
                assert!(cells.windows(2).all(|w| w[0].is_adjacent(&w[1])));
                found += 1;
            }
            None => {
                assert_eq!(outcome.failure_reason, Some(PathFailure::NoPath));
                assert!(outcome.path.is_empty());
            }
        }
    }

    assert!(found > 10, "too few solvable cases ({found})");
}

#[test]
fn test_four_connected_costs_match_dijkstra() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..30 {
        let config = GridConfig::new(12, 12, 1.0)
            .with_origin(WorldPoint::ZERO)
            .with_diagonal(false);
        let grid = NavGrid::from_fn(&config, |_| rng.random_bool(0.75)).unwrap();
        let (Some(start), Some(target)) =
            (random_walkable(&mut rng, &grid), random_walkable(&mut rng, &grid))
        else {
            continue;
        };
        let start_id = grid.coord_to_index(start).unwrap();
        let target_id = grid.coord_to_index(target).unwrap();

        let outcome = AStarPlanner::with_defaults(&grid).find_path(start_id, target_id);
        let reference = dijkstra_cost(&grid, start_id, target_id);

        assert_eq!(outcome.success(), reference.is_some());
        if let Some(cost) = reference {
            assert_eq!(outcome.cost, cost);
            assert_eq!(outcome.cost % 10, 0);
        }
    }
}

#[test]
fn test_simplified_paths_are_stable() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..40 {
        let grid = random_grid(&mut rng, 20, 20, 0.2);
        let (Some(start), Some(target)) =
            (random_walkable(&mut rng, &grid), random_walkable(&mut rng, &grid))
        else {
            continue;
        };

        let result = AStarPlanner::with_defaults(&grid)
            .find_path_world(grid.grid_to_world(start), grid.grid_to_world(target));
        if !result.success {
            assert!(result.waypoints.is_empty());
            continue;
        }

        let once = simplify_path(&result.path_grid);
        let mut anchored = vec![start];
        anchored.extend_from_slice(&once);
        assert_eq!(simplify_path(&anchored), once);

        assert!(result.waypoints.len() <= result.path_grid.len());
        assert_eq!(
            result.waypoints.last().map(|w| grid.world_to_grid(*w)),
            Some(target)
        );
    }
}
