use mapex_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-directional unit-cost grid this never overestimates the true
/// travel cost, which is what makes it a sound A* heuristic.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
