use std::collections::BinaryHeap;

use mapex_core::Point;

use crate::PathFinder;
use crate::distance::manhattan;
use crate::finder::NodeRef;
use crate::trace::Trace;
use crate::traits::Pather;

impl PathFinder {
    /// A* search from `from` to `to` under the Manhattan heuristic.
    ///
    /// Manhattan distance never overestimates the remaining cost on a
    /// 4-directional unit-cost grid, so the returned path is shortest by
    /// move count, matching BFS in length. Selection from the open set is
    /// fully deterministic: lowest `f`, ties to lowest `g`, then to lowest
    /// row-major position. Returns `None` once the open set runs dry
    /// without meeting `to`.
    ///
    /// `trace` is notified once per selected position (the destination
    /// included), together with the open set at that moment; the selected
    /// position is only closed afterwards, so it appears in its own snapshot.
    pub fn astar_path<P: Pather, T: Trace>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        trace: &mut T,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        // Bump generation to lazily invalidate all records.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut snap = std::mem::take(&mut self.snap);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries superseded by a better relaxation.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            let cp = self.point(ci);

            // Snapshot the open set before closing the current position.
            snap.clear();
            for (i, n) in self.nodes.iter().enumerate() {
                if n.generation == cur_gen && n.open {
                    snap.push(self.point(i));
                }
            }
            trace.observe(cp, &snap);

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    g: n.g,
                });
            }
        };

        self.nbuf = nbuf;
        self.snap = snap;

        if !found {
            log::debug!("astar: no route from {from} to {to}");
            return None;
        }
        Some(self.reconstruct(goal_idx))
    }
}
