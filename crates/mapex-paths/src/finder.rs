//! The search coordinator and its shared storage.

use std::collections::VecDeque;

use mapex_core::Point;

// ---------------------------------------------------------------------------
// Internal node state
// ---------------------------------------------------------------------------

/// Per-position record for searches that track predecessors (BFS, A*).
#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the start.
    pub(crate) g: i32,
    /// `g` plus the heuristic estimate to the destination (A* only).
    pub(crate) f: i32,
    /// Flat index of the position this one was reached from.
    pub(crate) parent: usize,
    /// Search generation this record belongs to; stale otherwise.
    pub(crate) generation: u32,
    /// Whether the position is currently in the A* open set.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry for A*, ordered so the max-heap pops the lowest `f` first.
///
/// Ties fall to the lowest `g`, then the lowest row-major index, making
/// selection fully deterministic across runs.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap; compare reversed so the smallest
        // entry pops first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// One frame of the explicit depth-first stack.
///
/// A frame's neighbor list lives in the shared arena at
/// `nbase .. nbase + nlen`; `cursor` is the next neighbor to try.
#[derive(Clone, Copy)]
pub(crate) struct DlsFrame {
    pub(crate) pos: Point,
    /// Remaining depth budget at this position. Always ≥ 1 for a live frame.
    pub(crate) depth: usize,
    pub(crate) nbase: usize,
    pub(crate) nlen: usize,
    pub(crate) cursor: usize,
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for path searches on a fixed-size grid.
///
/// `PathFinder` owns all per-search storage (predecessor/score records, the
/// BFS queue, the depth-first frame stack, scratch buffers) so that repeated
/// queries incur no allocations after the first use. Stale records are
/// invalidated lazily by a generation counter; every search call starts from
/// a clean slate, and no search state is observable across calls.
pub struct PathFinder {
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// BFS / A* per-position records.
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// BFS frontier.
    pub(crate) queue: VecDeque<usize>,
    /// Depth-first frame stack and its neighbor arena.
    pub(crate) frames: Vec<DlsFrame>,
    pub(crate) arena: Vec<Point>,
    /// Explored-set stamps for the depth-first family.
    pub(crate) explored: Vec<u32>,
    pub(crate) dls_generation: u32,
    /// Scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Point>,
    /// Scratch buffer for frontier snapshots handed to a trace sink.
    pub(crate) snap: Vec<Point>,
}

impl PathFinder {
    /// Create a finder for grids of the given size (width = x, height = y).
    pub fn new(size: Point) -> Self {
        let width = size.x.max(0) as usize;
        let height = size.y.max(0) as usize;
        let len = width * height;
        Self {
            width,
            height,
            nodes: vec![Node::default(); len],
            generation: 0,
            queue: VecDeque::new(),
            frames: Vec::new(),
            arena: Vec::new(),
            explored: vec![0; len],
            dls_generation: 0,
            nbuf: Vec::with_capacity(4),
            snap: Vec::new(),
        }
    }

    /// The grid size this finder was built for (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a point to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width as i32 || p.y >= self.height as i32 {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Walk parent links from `goal_idx` back to the parentless start and
    /// return the chain in start→goal order.
    ///
    /// Only called for positions recorded as reached in the current
    /// generation; an unrecorded terminal is a bug in the calling search.
    pub(crate) fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            debug_assert_eq!(
                self.nodes[ci].generation, self.generation,
                "reconstruction reached a position the search never recorded"
            );
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
