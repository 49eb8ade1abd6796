use std::collections::{HashSet, VecDeque};

use gridwalk_core::{Coord, Grid, Terrain};
use gridwalk_paths::{Algorithm, SearchConfig, SearchOutcome, Searcher, manhattan, path_cost};
use proptest::prelude::*;

/// A small grid with random terrain and two distinct markers.
fn small_grid(max: i32) -> impl Strategy<Value = Grid> {
    grid(2, max, 3)
}

/// A `min..=max` square-ish grid where roughly `walls` cells in ten are
/// walls and two in ten are weights.
fn grid(min: i32, max: i32, walls: u8) -> impl Strategy<Value = Grid> {
    (min..=max, min..=max).prop_flat_map(move |(rows, cols)| {
        let len = (rows * cols) as usize;
        (
            Just((rows, cols)),
            prop::collection::vec(0u8..10, len),
            0..len,
            0..len - 1,
        )
            .prop_map(move |((rows, cols), terrain, s, e)| {
                let mut g = Grid::new(rows, cols);
                for (i, t) in terrain.into_iter().enumerate() {
                    let c = Coord::from_index(i, cols);
                    if t < walls {
                        g.set_wall(c).unwrap();
                    } else if t < walls + 2 {
                        g.set_weight(c).unwrap();
                    }
                }
                let e = if e >= s { e + 1 } else { e };
                g.set_start(Coord::from_index(s, cols)).unwrap();
                g.set_end(Coord::from_index(e, cols)).unwrap();
                g
            })
    })
}

/// Whether the end can be reached at all, by plain flood fill.
fn reachable(g: &Grid) -> bool {
    let (start, end) = g.endpoints().unwrap();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(at) = queue.pop_front() {
        if at == end {
            return true;
        }
        for n in at.neighbors_4(1) {
            if g.contains(n) && !g.is_only_wall(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

/// Whether some simple path costs strictly less than `bound`.
///
/// Exhaustive, but cut off as soon as the cost so far plus the remaining
/// Manhattan distance reaches the bound.
fn cheaper_path_exists(g: &Grid, cfg: SearchConfig, bound: i32) -> bool {
    fn walk(g: &Grid, cfg: SearchConfig, at: Coord, end: Coord, cost: i32, bound: i32, seen: &mut HashSet<Coord>) -> bool {
        if cost + manhattan(at, end) >= bound {
            return false;
        }
        if at == end {
            return true;
        }
        for n in at.neighbors_4(1) {
            if !g.contains(n) || g.is_only_wall(n) || seen.contains(&n) {
                continue;
            }
            let step = if g.is_only_weight(n) { cfg.weight_cost } else { 1 };
            seen.insert(n);
            let found = walk(g, cfg, n, end, cost + step, bound, seen);
            seen.remove(&n);
            if found {
                return true;
            }
        }
        false
    }

    let (start, end) = g.endpoints().unwrap();
    let mut seen = HashSet::from([start]);
    walk(g, cfg, start, end, 0, bound, &mut seen)
}

/// Cheapest cost over every simple path, by exhaustive enumeration.
fn brute_force_cost(g: &Grid, cfg: SearchConfig, unit: bool) -> Option<i32> {
    fn walk(
        g: &Grid,
        cfg: SearchConfig,
        unit: bool,
        at: Coord,
        end: Coord,
        cost: i32,
        seen: &mut HashSet<Coord>,
        best: &mut Option<i32>,
    ) {
        if best.is_some_and(|b| cost >= b) {
            return;
        }
        if at == end {
            *best = Some(cost);
            return;
        }
        for n in at.neighbors_4(1) {
            if !g.contains(n) || g.is_only_wall(n) || seen.contains(&n) {
                continue;
            }
            let step = if !unit && g.is_only_weight(n) {
                cfg.weight_cost
            } else {
                1
            };
            seen.insert(n);
            walk(g, cfg, unit, n, end, cost + step, seen, best);
            seen.remove(&n);
        }
    }

    let (start, end) = g.endpoints().ok()?;
    let mut seen = HashSet::from([start]);
    let mut best = None;
    walk(g, cfg, unit, start, end, 0, &mut seen, &mut best);
    best
}

fn assert_connected_path(g: &Grid, path: &[Coord]) -> Result<(), TestCaseError> {
    let (start, end) = g.endpoints().unwrap();
    prop_assert_eq!(path.first(), Some(&start));
    prop_assert_eq!(path.last(), Some(&end));
    let unique: HashSet<_> = path.iter().collect();
    prop_assert_eq!(unique.len(), path.len());
    for w in path.windows(2) {
        prop_assert_eq!(w[0].manhattan(w[1]), 1);
    }
    for &p in path {
        prop_assert!(g.contains(p) && !g.is_only_wall(p));
    }
    Ok(())
}

proptest! {
    #[test]
    fn reruns_are_identical(g in small_grid(6)) {
        let mut s = Searcher::default();
        for a in Algorithm::ALL {
            let first = s.run_markers(&g, a).unwrap().finish();
            let second = s.run_markers(&g, a).unwrap().finish();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn visits_are_unique(g in small_grid(6)) {
        let mut s = Searcher::default();
        for a in Algorithm::ALL {
            let r = s.run_markers(&g, a).unwrap().finish();
            let unique: HashSet<_> = r.visited_order.iter().collect();
            prop_assert_eq!(unique.len(), r.visited_order.len());
            prop_assert!(r.visited_order.len() <= g.len());
        }
    }

    #[test]
    fn dijkstra_matches_brute_force(g in small_grid(4)) {
        let cfg = SearchConfig::default();
        let mut s = Searcher::new(cfg);
        let r = s.run_markers(&g, Algorithm::Dijkstra).unwrap().finish();
        let best = brute_force_cost(&g, cfg, false);
        prop_assert_eq!(r.path.as_ref().map(|p| path_cost(&g, p, cfg)), best);
    }

    #[test]
    fn bfs_finds_fewest_moves(g in small_grid(4)) {
        let cfg = SearchConfig::default();
        let mut s = Searcher::new(cfg);
        let r = s.run_markers(&g, Algorithm::Bfs).unwrap().finish();
        let best = brute_force_cost(&g, cfg, true);
        prop_assert_eq!(r.path.as_ref().map(|p| p.len() as i32 - 1), best);
    }

    #[test]
    fn astar_costs_the_same_as_dijkstra(g in small_grid(6)) {
        let cfg = SearchConfig::default();
        let mut s = Searcher::new(cfg);
        let d = s.run_markers(&g, Algorithm::Dijkstra).unwrap().finish();
        let a = s.run_markers(&g, Algorithm::AStar).unwrap().finish();
        prop_assert_eq!(
            d.path.as_ref().map(|p| path_cost(&g, p, cfg)),
            a.path.as_ref().map(|p| path_cost(&g, p, cfg))
        );
        prop_assert!(a.visited_order.len() <= d.visited_order.len());
    }

    #[test]
    fn every_path_is_connected(g in small_grid(6)) {
        let mut s = Searcher::default();
        let reachable = s.run_markers(&g, Algorithm::Bfs).unwrap().finish().path.is_some();
        for a in Algorithm::ALL {
            let r = s.run_markers(&g, a).unwrap().finish();
            prop_assert_eq!(r.path.is_some(), reachable);
            if let Some(path) = r.path {
                assert_connected_path(&g, &path)?;
            }
        }
    }

    #[test]
    fn bidirectional_meets_on_a_cell_visited_by_both(g in small_grid(6)) {
        let mut s = Searcher::default();
        for a in [Algorithm::BidirectionalBfs, Algorithm::BidirectionalDijkstra] {
            let mut run = s.run_markers(&g, a).unwrap();
            run.by_ref().for_each(drop);
            if *run.outcome() == SearchOutcome::Found {
                let meet = run.meeting_point().unwrap();
                let n = run.exploration(meet).unwrap();
                prop_assert!(n.visited_from_start && n.visited_from_end);
                prop_assert!(run.path().unwrap().contains(&meet));
            } else {
                prop_assert!(run.meeting_point().is_none());
            }
        }
    }

    #[test]
    fn open_grid_bfs_is_manhattan(rows in 1i32..8, cols in 2i32..8, seed in any::<u64>()) {
        let len = (rows * cols) as u64;
        let s = Coord::from_index((seed % len) as usize, cols);
        let e = Coord::from_index(((seed / len + 1 + seed % len) % len) as usize, cols);
        prop_assume!(s != e);
        let mut g = Grid::new(rows, cols);
        g.set_start(s).unwrap();
        g.set_end(e).unwrap();
        prop_assert!(g.iter().all(|c| c.terrain == Terrain::Clear));
        let mut searcher = Searcher::default();
        let r = searcher.run_markers(&g, Algorithm::Bfs).unwrap().finish();
        prop_assert_eq!(r.path.unwrap().len() as i32 - 1, s.manhattan(e));
        prop_assert!(r.visited_order.len() <= g.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn dijkstra_is_cheapest_up_to_six_by_six(g in grid(5, 6, 2)) {
        let cfg = SearchConfig::default();
        let mut s = Searcher::new(cfg);
        let r = s.run_markers(&g, Algorithm::Dijkstra).unwrap().finish();
        match r.path {
            Some(path) => {
                assert_connected_path(&g, &path)?;
                prop_assert!(!cheaper_path_exists(&g, cfg, path_cost(&g, &path, cfg)));
            }
            None => prop_assert!(!reachable(&g)),
        }
    }
}
