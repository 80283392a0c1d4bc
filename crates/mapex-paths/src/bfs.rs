use mapex_core::Point;

use crate::PathFinder;
use crate::trace::Trace;
use crate::traits::Pather;

impl PathFinder {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Expands positions in FIFO order, so the returned path is shortest by
    /// move count; ties between equal-length routes are settled by discovery
    /// order, which follows the pather's neighbor order. Returns `None` once
    /// the whole reachable region has been expanded without meeting `to`.
    ///
    /// `trace` is notified once per dequeued position (the destination
    /// included), together with the queue remaining at that moment.
    pub fn bfs_path<P: Pather, T: Trace>(
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
            node.parent = usize::MAX;
            node.generation = cur_gen;
        }

        let mut queue = std::mem::take(&mut self.queue);
        queue.clear();
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut snap = std::mem::take(&mut self.snap);

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
            let cp = self.point(ci);

            snap.clear();
            snap.extend(queue.iter().map(|&i| self.point(i)));
            trace.observe(cp, &snap);

            if ci == goal_idx {
                found = true;
                break;
            }

            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered; the first discovery wins.
                    continue;
                }
                n.generation = cur_gen;
                n.g = current_g + 1;
                n.parent = ci;
                queue.push_back(ni);
            }
        }

        self.queue = queue;
        self.nbuf = nbuf;
        self.snap = snap;

        if !found {
            log::debug!("bfs: no route from {from} to {to}");
            return None;
        }
        Some(self.reconstruct(goal_idx))
    }
}

#[cfg(test)]
mod tests {
    use mapex_core::{Point, TileGrid};

    use crate::finder::PathFinder;
    use crate::trace::{NoTrace, TraceRecorder};

    fn grid(text: &str) -> (TileGrid, PathFinder) {
        let grid = TileGrid::parse(text).unwrap();
        let finder = PathFinder::new(grid.size());
        (grid, finder)
    }

    #[test]
    fn open_grid_shortest_path() {
        let (grid, mut finder) = grid("\
S....
.....
.....
.....
....D");
        let path = finder
            .bfs_path(&grid, grid.start(), grid.destination(), &mut NoTrace)
            .unwrap();
        // 8 moves; intermediate cells follow the up, down, left, right
        // neighbor order.
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(0, 3),
                Point::new(0, 4),
                Point::new(1, 4),
                Point::new(2, 4),
                Point::new(3, 4),
                Point::new(4, 4),
            ]
        );
    }

    #[test]
    fn corridor_forces_unique_path() {
        let (grid, mut finder) = grid("\
S....
XXXX.
D....");
        let path = finder
            .bfs_path(&grid, grid.start(), grid.destination(), &mut NoTrace)
            .unwrap();
        assert_eq!(path.len(), 11);
        assert_eq!(path[0], grid.start());
        assert_eq!(path[10], grid.destination());
        assert_eq!(path[4], Point::new(4, 0));
        assert_eq!(path[5], Point::new(4, 1));
        assert_eq!(path[6], Point::new(4, 2));
    }

    #[test]
    fn adjacent_start_and_destination() {
        let (grid, mut finder) = grid("\
XXXX
XSDX
XXXX");
        let path = finder
            .bfs_path(&grid, grid.start(), grid.destination(), &mut NoTrace)
            .unwrap();
        assert_eq!(path, vec![Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    fn walled_off_destination_is_unreachable() {
        let (grid, mut finder) = grid("\
S..XX
...XD
...XX");
        assert_eq!(
            finder.bfs_path(&grid, grid.start(), grid.destination(), &mut NoTrace),
            None
        );
    }

    #[test]
    fn trace_sees_dequeues_with_remaining_queue() {
        let (grid, mut finder) = grid("\
S.
.D");
        let mut rec = TraceRecorder::new();
        let path = finder
            .bfs_path(&grid, grid.start(), grid.destination(), &mut rec)
            .unwrap();
        assert_eq!(path.len(), 3);

        let events = rec.events();
        // First event: the start is popped, leaving an empty queue.
        assert_eq!(events[0].current, Point::new(0, 0));
        assert_eq!(events[0].frontier, Vec::new());
        // Start's neighbors enter the queue in down-then-right order.
        assert_eq!(events[1].current, Point::new(0, 1));
        assert_eq!(events[1].frontier, vec![Point::new(1, 0)]);
        // Final event is the destination's own dequeue.
        assert_eq!(events.last().unwrap().current, grid.destination());
    }

    #[test]
    fn deterministic_across_runs_and_sinks() {
        let (grid, mut finder) = grid("\
S..X.
.X...
...XD");
        let first = finder.bfs_path(&grid, grid.start(), grid.destination(), &mut NoTrace);
        let mut rec = TraceRecorder::new();
        let second = finder.bfs_path(&grid, grid.start(), grid.destination(), &mut rec);
        assert_eq!(first, second);
        assert!(!rec.is_empty());
    }
}
