use mapex_core::{Point, TileGrid};

/// Minimal search interface: neighbor enumeration.
///
/// Implementations decide which positions are adjacent and in which order
/// they are offered to a search. The order matters: the depth-first family
/// commits to the first workable branch, and BFS breaks distance ties by
/// discovery order.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for TileGrid {
    /// The four walkable orthogonal neighbors, in the grid's fixed
    /// up, down, left, right order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        TileGrid::neighbors(self, p, buf);
    }
}
