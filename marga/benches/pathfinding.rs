//! Benchmark A* search and waypoint simplification.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marga::pathfinding::simplify_path;
use marga::{AStarPlanner, GridConfig, GridCoord, IndexedMinHeap, NavGrid, WorldPoint};

/// Square grid with evenly spaced walls, each with a gap at alternating ends.
fn maze_grid(size: usize) -> NavGrid {
    let config = GridConfig::new(size, size, 1.0).with_origin(WorldPoint::ZERO);
    NavGrid::from_fn(&config, |c| {
        if c.x % 8 != 4 {
            return true;
        }
        let gap_at_top = (c.x / 8) % 2 == 0;
        if gap_at_top {
            c.y >= size as i32 - 2
        } else {
            c.y < 2
        }
    })
    .expect("valid grid config")
}

fn bench_open_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_open");

    for size in [64usize, 128, 256] {
        let config = GridConfig::new(size, size, 1.0).with_origin(WorldPoint::ZERO);
        let grid = NavGrid::new(&config).expect("valid grid config");
        let planner = AStarPlanner::with_defaults(&grid);
        let start = 0;
        let target = size * size - 1;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| planner.find_path(black_box(start), black_box(target)))
        });
    }

    group.finish();
}

fn bench_maze(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_maze");

    for size in [64usize, 128] {
        let grid = maze_grid(size);
        let planner = AStarPlanner::with_defaults(&grid);
        let start = WorldPoint::new(0.5, 0.5);
        let target = WorldPoint::new(size as f32 - 0.5, size as f32 - 0.5);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| planner.find_path_world(black_box(start), black_box(target)))
        });
    }

    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let grid = maze_grid(128);
    let result = AStarPlanner::with_defaults(&grid)
        .find_path_world(WorldPoint::new(0.5, 0.5), WorldPoint::new(127.5, 127.5));
    let path: Vec<GridCoord> = result.path_grid;

    c.bench_function("simplify_maze_path", |b| {
        b.iter(|| simplify_path(black_box(&path)))
    });
}

fn bench_heap(c: &mut Criterion) {
    use marga::HeapStore;
    use std::cmp::Ordering;

    struct Keys {
        keys: Vec<u32>,
        slots: Vec<Option<usize>>,
    }

    impl HeapStore<usize> for Keys {
        fn heap_index(&self, item: usize) -> Option<usize> {
            self.slots[item]
        }
        fn set_heap_index(&mut self, item: usize, index: Option<usize>) {
            self.slots[item] = index;
        }
        fn compare(&self, a: usize, b: usize) -> Ordering {
            self.keys[a].cmp(&self.keys[b])
        }
    }

    const N: usize = 10_000;
    let keys: Vec<u32> = (0..N as u32)
        .map(|i| i.wrapping_mul(2_654_435_761) % 100_000)
        .collect();

    c.bench_function("heap_add_remove_10k", |b| {
        b.iter(|| {
            let mut store = Keys {
                keys: keys.clone(),
                slots: vec![None; N],
            };
            let mut heap = IndexedMinHeap::new(N);
            for item in 0..N {
                heap.add(item, &mut store);
            }
            while let Some(item) = heap.remove_first(&mut store) {
                black_box(item);
            }
        })
    });
}

criterion_group!(benches, bench_open_grid, bench_maze, bench_simplify, bench_heap);
criterion_main!(benches);
