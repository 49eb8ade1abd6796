//! The lazy search run: a finite, forward-only iterator of visitation events.
//!
//! A cell is *visited* when it is popped from a frontier and expanded, not
//! when it is first discovered. Every pull of [`SearchRun::next`] performs
//! exactly the work needed to produce the next visit, so a consumer can stop
//! at any point and nothing keeps running behind its back.

use gridwalk_core::Coord;
use log::{debug, trace, warn};

use crate::algorithm::{Algorithm, Policy};
use crate::config::FrontierTurn;
use crate::frontier::{Entry, Frontier};
use crate::searcher::{ExplorationCell, Searcher, Side};
use crate::traits::AstarPather;

/// One visitation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub coord: Coord,
    pub side: Side,
}

/// Where a run stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// More visits can be pulled.
    InProgress,
    /// The end was reached (or the two frontiers met) and a path exists.
    Found,
    /// A frontier ran dry: the end is unreachable from the start.
    NotFound,
}

/// Everything a drained run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited_order: Vec<Coord>,
    /// `None` means the end is unreachable.
    pub path: Option<Vec<Coord>>,
}

/// A search in progress. Created by [`Searcher::run`].
pub struct SearchRun<'a, P> {
    space: &'a mut Searcher,
    pather: P,
    algorithm: Algorithm,
    policy: Policy,
    start: Coord,
    end: Coord,
    forward: Frontier,
    backward: Option<Frontier>,
    next_side: Side,
    outcome: SearchOutcome,
    meeting: Option<Coord>,
    path: Option<Vec<Coord>>,
    visits: usize,
}

impl<'a, P: AstarPather> SearchRun<'a, P> {
    pub(crate) fn new(
        space: &'a mut Searcher,
        pather: P,
        algorithm: Algorithm,
        start: Coord,
        end: Coord,
    ) -> Self {
        let policy = algorithm.policy();
        let mut run = Self {
            space,
            pather,
            algorithm,
            policy,
            start,
            end,
            forward: Frontier::new(policy),
            backward: algorithm.is_bidirectional().then(|| Frontier::new(policy)),
            next_side: Side::Start,
            outcome: SearchOutcome::InProgress,
            meeting: None,
            path: None,
            visits: 0,
        };
        run.push_seed(Side::Start, start);
        if run.backward.is_some() {
            run.push_seed(Side::End, end);
        }
        run
    }

    fn push_seed(&mut self, side: Side, c: Coord) {
        // Seeds are bounds-checked by `Searcher::run_with`.
        let Some(n) = self.space.node_mut(c, &self.pather) else {
            return;
        };
        n.discover(side);
        n.set_distance(side, 0);
        let key = match self.policy {
            Policy::DistanceHeuristic | Policy::Heuristic => n.heuristic,
            _ => 0.0,
        };
        self.frontier(side).push(Entry {
            coord: c,
            from: None,
            g: 0,
            key,
        });
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    #[inline]
    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Number of visits emitted so far.
    #[inline]
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// The path from start to end, once the run has found one.
    pub fn path(&self) -> Option<&[Coord]> {
        self.path.as_deref()
    }

    /// The cell where the two frontiers met (bidirectional runs only).
    pub fn meeting_point(&self) -> Option<Coord> {
        self.meeting
    }

    /// This run's decoration of `c`, if the run has touched it.
    pub fn exploration(&self, c: Coord) -> Option<&ExplorationCell> {
        self.space.exploration(c)
    }

    /// Pull every remaining visit and return the full trace with the path.
    pub fn finish(mut self) -> SearchResult {
        let mut visited_order: Vec<Coord> = Vec::new();
        for v in self.by_ref() {
            visited_order.push(v.coord);
        }
        SearchResult {
            visited_order,
            path: self.path.take(),
        }
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    #[inline]
    fn seed(&self, side: Side) -> Coord {
        match side {
            Side::Start => self.start,
            Side::End => self.end,
        }
    }

    fn frontier(&mut self, side: Side) -> &mut Frontier {
        match side {
            Side::Start => &mut self.forward,
            Side::End => self.backward.as_mut().unwrap_or(&mut self.forward),
        }
    }

    fn choose_side(&mut self) -> Side {
        let Some(backward) = &self.backward else {
            return Side::Start;
        };
        match self.space.config.turn {
            FrontierTurn::Alternate => {
                let side = self.next_side;
                self.next_side = side.other();
                side
            }
            FrontierTurn::Smaller => {
                if backward.len() < self.forward.len() {
                    Side::End
                } else {
                    Side::Start
                }
            }
        }
    }

    /// Cost of the step `from -> to` taken by `side`. The end side walks
    /// edges backwards, so it pays for entering `from`.
    fn step_cost(&self, side: Side, from: Coord, to: Coord) -> i32 {
        if !self.algorithm.is_weighted() {
            return 1;
        }
        match side {
            Side::Start => self.pather.cost(from, to),
            Side::End => self.pather.cost(to, from),
        }
    }

    fn step(&mut self) -> Option<Visit> {
        loop {
            if self.outcome != SearchOutcome::InProgress {
                return None;
            }
            let side = self.choose_side();
            let Some(entry) = self.frontier(side).pop() else {
                self.outcome = SearchOutcome::NotFound;
                debug!(
                    "{} search found no path after {} visits",
                    self.algorithm, self.visits
                );
                return None;
            };

            let c = entry.coord;
            let bidirectional = self.backward.is_some();
            let Some(node) = self.space.node_mut(c, &self.pather) else {
                continue;
            };
            if node.visited(side) {
                continue;
            }
            if self.algorithm.is_weighted() && entry.g > node.distance_on(side) {
                // Superseded by a cheaper entry.
                continue;
            }
            node.set_visited(side);
            node.set_parent(side, entry.from);
            node.set_distance(side, entry.g);

            if bidirectional && node.visited(side.other()) {
                // Already emitted by the other side: the halves join here.
                self.meet(c);
                return None;
            }

            self.visits += 1;
            let visit = Visit { coord: c, side };
            trace!("visit {c} from {side:?}");

            if c == self.seed(side.other()) {
                if bidirectional {
                    // Reached the other side's seed before it was expanded.
                    if let Some(n) = self.space.node_mut(c, &self.pather) {
                        n.set_visited(side.other());
                    }
                    self.meet(c);
                } else {
                    self.complete(c);
                }
                return Some(visit);
            }

            if let Some(meet) = self.expand(side, entry) {
                self.meet(meet);
            }
            return Some(visit);
        }
    }

    /// Push the neighbours of `entry` onto `side`'s frontier. Returns a
    /// meeting point if one of them has been visited by the other side.
    fn expand(&mut self, side: Side, entry: Entry) -> Option<Coord> {
        let c = entry.coord;
        let bidirectional = self.backward.is_some();
        let mut nbuf = std::mem::take(&mut self.space.nbuf);
        nbuf.clear();
        self.pather.neighbors(c, &mut nbuf);

        let (rows, cols) = (self.space.rows, self.space.cols);
        let mut meeting = None;
        for &n in nbuf.iter() {
            let cost = self.step_cost(side, c, n);
            let policy = self.policy;
            let Some(node) = self.space.node_mut(n, &self.pather) else {
                warn!("pather yielded {n}, outside the {rows}x{cols} search area");
                continue;
            };
            if node.visited(side) {
                continue;
            }
            if bidirectional && node.visited(side.other()) {
                node.set_visited(side);
                node.set_parent(side, Some(c));
                node.set_distance(side, entry.g.saturating_add(cost));
                meeting = Some(n);
                break;
            }

            let g = entry.g.saturating_add(cost);
            let key = match policy {
                Policy::Fifo | Policy::Lifo => 0.0,
                Policy::Heuristic => {
                    if !node.discover(side) {
                        continue;
                    }
                    node.heuristic
                }
                Policy::Distance | Policy::DistanceHeuristic => {
                    if g >= node.distance_on(side) {
                        continue;
                    }
                    node.set_distance(side, g);
                    node.set_parent(side, Some(c));
                    if policy == Policy::Distance {
                        f64::from(g)
                    } else {
                        f64::from(g) + node.heuristic
                    }
                }
            };
            if policy == Policy::Fifo && !node.discover(side) {
                continue;
            }
            self.frontier(side).push(Entry {
                coord: n,
                from: Some(c),
                g,
                key,
            });
        }

        self.space.nbuf = nbuf;
        meeting
    }

    fn complete(&mut self, end: Coord) {
        self.outcome = SearchOutcome::Found;
        let path = self.parent_chain(end, Side::Start);
        debug!(
            "{} search reached {} after {} visits, path of {} cells",
            self.algorithm,
            end,
            self.visits,
            path.len()
        );
        self.path = Some(path);
    }

    fn meet(&mut self, at: Coord) {
        self.outcome = SearchOutcome::Found;
        self.meeting = Some(at);
        let mut path = self.parent_chain(at, Side::Start);
        let back = self.parent_chain(at, Side::End);
        path.extend(back.into_iter().rev().skip(1));
        debug!(
            "{} frontiers met at {} after {} visits, path of {} cells",
            self.algorithm,
            at,
            self.visits,
            path.len()
        );
        self.path = Some(path);
    }

    /// Follow `side`'s parent links from `from` back to that side's seed.
    /// The result runs seed-first.
    fn parent_chain(&self, from: Coord, side: Side) -> Vec<Coord> {
        let mut out = vec![from];
        let mut cur = from;
        while let Some(p) = self
            .space
            .exploration(cur)
            .and_then(|n| n.parent_on(side))
        {
            out.push(p);
            cur = p;
        }
        out.reverse();
        out
    }
}

impl<P: AstarPather> Iterator for SearchRun<'_, P> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        self.step()
    }
}

impl<P: AstarPather> std::iter::FusedIterator for SearchRun<'_, P> {}
