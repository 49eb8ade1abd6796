use gridwalk_core::{Coord, Grid};
use gridwalk_maze::{MazeAlgorithm, MazeConfig, generate, generate_with};
use gridwalk_paths::{Algorithm, Searcher};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = MazeAlgorithm> {
    prop_oneof![Just(MazeAlgorithm::Backtracker), Just(MazeAlgorithm::Prim)]
}

proptest! {
    #[test]
    fn carved_mazes_are_spanning_trees(
        rows in 1i32..16,
        cols in 1i32..16,
        seed in any::<u64>(),
        algo in algorithm(),
    ) {
        let layout = generate_with(rows, cols, &MazeConfig { algorithm: algo, braid: 0.0, seed: Some(seed) });
        prop_assert_eq!(layout.validate(), Ok(()));
        prop_assert_eq!(layout.coarse_edges().len() + 1, layout.lattice_len());
        for p in &layout.passages {
            prop_assert!(p.row % 2 == 0 || p.col % 2 == 0);
        }
    }

    #[test]
    fn seeds_are_reproducible(rows in 1i32..12, cols in 1i32..12, seed in any::<u64>()) {
        prop_assert_eq!(generate(rows, cols, Some(seed)), generate(rows, cols, Some(seed)));
    }

    #[test]
    fn braided_mazes_stay_connected(seed in any::<u64>(), braid in 0.0f64..=1.0) {
        let layout = generate_with(11, 11, &MazeConfig { algorithm: MazeAlgorithm::Backtracker, braid, seed: Some(seed) });
        prop_assert_eq!(layout.check_connected(), Ok(()));
    }

    #[test]
    fn opposite_corners_are_joined(seed in any::<u64>(), half in 1i32..7) {
        let n = half * 2 + 1;
        let layout = generate(n, n, Some(seed));
        let mut grid = Grid::new(n, n);
        grid.set_start(Coord::ZERO).unwrap();
        grid.set_end(Coord::new(n - 1, n - 1)).unwrap();
        layout.apply(&mut grid).unwrap();

        let mut searcher = Searcher::default();
        let run = searcher.run_markers(&grid, Algorithm::Bfs).unwrap();
        let result = run.finish();
        let path = result.path.unwrap_or_default();
        prop_assert!(!path.is_empty());
        for c in &path {
            prop_assert!(layout.is_passage(*c));
        }
    }
}
