//! The tile map: a validated rectangular grid of terrain.

use std::fmt;

use crate::geom::Point;
use crate::tile::Tile;

/// Neighbor offsets in expansion order: up, down, left, right.
///
/// The order is part of the engine's contract: it decides which of several
/// equal-length routes the depth-first search family commits to.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// A rectangular grid of [`Tile`]s with exactly one [`Tile::Start`] and
/// exactly one [`Tile::Destination`].
///
/// Storage is row-major. Construction validates shape and tile counts, so a
/// `TileGrid` value is always well-formed and searches need no further
/// checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
    start: Point,
    destination: Point,
}

impl TileGrid {
    /// Build a grid from rows of tiles.
    ///
    /// Fails if the input is empty, if any row's length differs from the
    /// first row's, or if the grid does not contain exactly one Start and
    /// exactly one Destination.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut start = None;
        let mut destination = None;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &tile) in row.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match tile {
                    Tile::Start => {
                        if start.is_some() {
                            return Err(GridError::DuplicateStart(p));
                        }
                        start = Some(p);
                    }
                    Tile::Destination => {
                        if destination.is_some() {
                            return Err(GridError::DuplicateDestination(p));
                        }
                        destination = Some(p);
                    }
                    Tile::Free | Tile::Blocked => {}
                }
                tiles.push(tile);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let destination = destination.ok_or(GridError::MissingDestination)?;

        Ok(Self {
            tiles,
            width: width as i32,
            height: height as i32,
            start,
            destination,
        })
    }

    /// Parse a grid from its text form.
    ///
    /// One line per row: `.` free, `X` blocked, `S` start, `D` destination.
    /// Surrounding blank lines and trailing whitespace on each line are
    /// trimmed; after trimming, all rows must have equal width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim_matches(['\n', '\r']);
        let mut rows = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end();
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridError::UnknownTile {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[(p.y * self.width + p.x) as usize])
    }

    /// The single Start position.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The single Destination position.
    #[inline]
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Whether `p` is in bounds and a search may step onto it.
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_walkable)
    }

    /// Append the walkable neighbors of `p` into `buf`, in expansion order
    /// (up, down, left, right). The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in DIRS {
            let n = p + d;
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }

    /// Iterate over all positions and their tiles, row by row.
    pub fn iter(&self, mut f: impl FnMut(Point, Tile)) {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                f(p, self.tiles[(y * self.width + x) as usize]);
            }
        }
    }
}

impl fmt::Display for TileGrid {
    /// Re-encode the grid in its text form, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                write!(f, "{}", self.tiles[(y * self.width + x) as usize].to_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a [`TileGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no tiles at all.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A character outside the map alphabet.
    UnknownTile { ch: char, pos: Point },
    /// No Start tile anywhere in the grid.
    MissingStart,
    /// A second Start tile, at the given position.
    DuplicateStart(Point),
    /// No Destination tile anywhere in the grid.
    MissingDestination,
    /// A second Destination tile, at the given position.
    DuplicateDestination(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::RaggedRow { row, len, expected } => {
                write!(f, "map row {row} is {len} tiles wide, expected {expected}")
            }
            Self::UnknownTile { ch, pos } => {
                write!(f, "map contains unknown tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "map has no start tile"),
            Self::DuplicateStart(p) => write!(f, "map has a second start tile at {p}"),
            Self::MissingDestination => write!(f, "map has no destination tile"),
            Self::DuplicateDestination(p) => {
                write!(f, "map has a second destination tile at {p}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
S..X
.X..
...D";

    #[test]
    fn parse_and_accessors() {
        let grid = TileGrid::parse(MAP).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.size(), Point::new(4, 3));
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.destination(), Point::new(3, 2));
        assert_eq!(grid.at(Point::new(3, 0)), Some(Tile::Blocked));
        assert_eq!(grid.at(Point::new(1, 0)), Some(Tile::Free));
        assert_eq!(grid.at(Point::new(4, 0)), None);
        assert_eq!(grid.at(Point::new(0, -1)), None);
    }

    #[test]
    fn parse_tolerates_surrounding_blank_lines_and_trailing_spaces() {
        let grid = TileGrid::parse("\nS.D  \n\n").unwrap();
        assert_eq!(grid.size(), Point::new(3, 1));
    }

    #[test]
    fn display_round_trips() {
        let grid = TileGrid::parse(MAP).unwrap();
        assert_eq!(grid.to_string(), MAP);
        assert_eq!(TileGrid::parse(&grid.to_string()).unwrap(), grid);
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(TileGrid::parse(""), Err(GridError::Empty));
        assert_eq!(TileGrid::parse("\n\n"), Err(GridError::Empty));
        assert_eq!(TileGrid::from_rows(Vec::new()), Err(GridError::Empty));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = TileGrid::parse("S..\n..\n..D").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn unknown_tile_rejected() {
        let err = TileGrid::parse("S.#\n..D").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownTile {
                ch: '#',
                pos: Point::new(2, 0)
            }
        );
    }

    #[test]
    fn start_and_destination_must_be_unique() {
        assert_eq!(
            TileGrid::parse("SS\n.D"),
            Err(GridError::DuplicateStart(Point::new(1, 0)))
        );
        assert_eq!(
            TileGrid::parse("SD\nDD"),
            Err(GridError::DuplicateDestination(Point::new(0, 1)))
        );
        assert_eq!(TileGrid::parse("..\n.D"), Err(GridError::MissingStart));
        assert_eq!(TileGrid::parse("S.\n.."), Err(GridError::MissingDestination));
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let grid = TileGrid::parse("\
...
.S.
..D")
        .unwrap();
        let mut buf = Vec::new();
        grid.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(1, 0), // up
                Point::new(1, 2), // down
                Point::new(0, 1), // left
                Point::new(2, 1), // right
            ]
        );
    }

    #[test]
    fn neighbors_filter_bounds_walls_and_start() {
        let grid = TileGrid::parse("\
SX
.D")
        .unwrap();
        let mut buf = Vec::new();
        // Corner: up/left out of bounds, right blocked.
        grid.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);

        // Start is never an expansion target; the destination is.
        buf.clear();
        grid.neighbors(Point::new(0, 1), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 1)]);
    }

    #[test]
    fn destination_is_walkable_start_is_not() {
        let grid = TileGrid::parse(MAP).unwrap();
        assert!(grid.is_walkable(grid.destination()));
        assert!(!grid.is_walkable(grid.start()));
        assert!(!grid.is_walkable(Point::new(-1, 0)));
    }

    #[test]
    fn iter_visits_every_tile_in_row_major_order() {
        let grid = TileGrid::parse("SD\nX.").unwrap();
        let mut seen = Vec::new();
        grid.iter(|p, t| seen.push((p, t)));
        assert_eq!(
            seen,
            vec![
                (Point::new(0, 0), Tile::Start),
                (Point::new(1, 0), Tile::Destination),
                (Point::new(0, 1), Tile::Blocked),
                (Point::new(1, 1), Tile::Free),
            ]
        );
    }
}
