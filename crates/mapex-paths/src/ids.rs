use mapex_core::Point;

use crate::PathFinder;
use crate::trace::Trace;
use crate::traits::Pather;

impl PathFinder {
    /// Iterative-deepening search from `from` to `to`.
    ///
    /// Runs depth-limited passes with budgets 1, 2, … up to width × height
    /// (no simple path can take more moves), each pass with a fresh explored
    /// set, and returns the first hit. A pass that comes back empty only
    /// means that budget was too small, so the next one is tried; `None`
    /// after the final budget means `to` is unreachable.
    ///
    /// Memory use stays depth-first-small while the growing budget recovers
    /// most of BFS's shortest-path behavior. The guarantee is not absolute:
    /// each pass shares one explored set across branches (see
    /// [`dls_path`](Self::dls_path)), so a pass can miss a route of exactly
    /// its budget and the next budget's find may be longer than optimal.
    ///
    /// `trace` is notified once per position entered, in every pass, so a
    /// consumer sees each deepening wave in full.
    pub fn ids_path<P: Pather, T: Trace>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        trace: &mut T,
    ) -> Option<Vec<Point>> {
        let max = self.width * self.height;
        for limit in 1..=max {
            log::trace!("ids: pass with budget {limit}");
            self.dls_generation = self.dls_generation.wrapping_add(1);
            if let Some(path) = self.dls_search(pather, from, to, limit, trace) {
                log::debug!("ids: reached {to} at budget {limit}");
                return Some(path);
            }
        }
        log::debug!("ids: no route from {from} to {to} within budget {max}");
        None
    }
}
