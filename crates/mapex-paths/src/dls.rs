use mapex_core::Point;

use crate::PathFinder;
use crate::finder::DlsFrame;
use crate::trace::Trace;
use crate::traits::Pather;

impl PathFinder {
    /// Depth-limited depth-first search from `from` to `to`.
    ///
    /// Follows the pather's neighbor order, committing to the first workable
    /// branch and backtracking when a branch runs out of depth: at most
    /// `limit` moves from the origin are ever taken. One explored set is
    /// shared across the whole call, so a position abandoned by one branch
    /// is never retried by a sibling. That bounds the work, but it can hide
    /// routes that do exist, and the path found is not necessarily shortest.
    ///
    /// `None` means the depth budget was the blocking factor, not proof that
    /// `to` is unreachable; [`ids_path`](Self::ids_path) builds on exactly
    /// that reading by retrying with a larger budget.
    ///
    /// The traversal runs on an explicit frame stack, so limits up to
    /// width × height are fine on any grid.
    ///
    /// `trace` is notified once per position entered; the depth-first family
    /// has no frontier to snapshot, so the frontier slice is always empty.
    pub fn dls_path<P: Pather, T: Trace>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        limit: usize,
        trace: &mut T,
    ) -> Option<Vec<Point>> {
        self.dls_generation = self.dls_generation.wrapping_add(1);
        self.dls_search(pather, from, to, limit, trace)
    }

    /// One depth-limited pass against the current explored-set generation.
    /// Shared body of [`dls_path`](Self::dls_path) and
    /// [`ids_path`](Self::ids_path).
    pub(crate) fn dls_search<P: Pather, T: Trace>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        limit: usize,
        trace: &mut T,
    ) -> Option<Vec<Point>> {
        let cur_gen = self.dls_generation;

        if from == to {
            return Some(vec![from]);
        }
        if limit == 0 {
            return None;
        }
        let start_idx = self.idx(from)?;

        self.frames.clear();
        self.arena.clear();

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // Enter the origin: mark, notify, materialize its neighbors.
        self.explored[start_idx] = cur_gen;
        trace.observe(from, &[]);
        nbuf.clear();
        pather.neighbors(from, &mut nbuf);
        self.arena.extend_from_slice(&nbuf);
        self.frames.push(DlsFrame {
            pos: from,
            depth: limit,
            nbase: 0,
            nlen: nbuf.len(),
            cursor: 0,
        });

        let mut result = None;

        'walk: while let Some(&top) = self.frames.last() {
            // Advance the top frame to its next unexplored neighbor.
            // Explored-ness is checked now, not at materialization time: a
            // sibling branch may have claimed the position in between.
            let mut cursor = top.cursor;
            let mut next = None;
            while cursor < top.nlen {
                let np = self.arena[top.nbase + cursor];
                cursor += 1;
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.explored[ni] == cur_gen {
                    continue;
                }
                next = Some((np, ni));
                break;
            }
            if let Some(frame) = self.frames.last_mut() {
                frame.cursor = cursor;
            }

            let Some((np, ni)) = next else {
                // Every neighbor tried: backtrack.
                self.frames.pop();
                self.arena.truncate(top.nbase);
                continue 'walk;
            };

            if np == to {
                let mut path: Vec<Point> = self.frames.iter().map(|f| f.pos).collect();
                path.push(np);
                result = Some(path);
                break 'walk;
            }

            let child_depth = top.depth - 1;
            if child_depth == 0 {
                // Budget exhausted below this frame; the position stays
                // unexplored and unreported.
                continue 'walk;
            }

            self.explored[ni] = cur_gen;
            trace.observe(np, &[]);
            nbuf.clear();
            pather.neighbors(np, &mut nbuf);
            let nbase = self.arena.len();
            self.arena.extend_from_slice(&nbuf);
            self.frames.push(DlsFrame {
                pos: np,
                depth: child_depth,
                nbase,
                nlen: nbuf.len(),
                cursor: 0,
            });
        }

        self.nbuf = nbuf;
        self.frames.clear();
        self.arena.clear();
        result
    }
}
