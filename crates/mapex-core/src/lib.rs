//! **mapex-core** — map model for the mapex path search engine.
//!
//! This crate provides the foundational types the search algorithms in
//! `mapex-paths` operate on: the geometry primitive [`Point`], the terrain
//! [`Tile`] alphabet, and the validated [`TileGrid`].
//!
//! A [`TileGrid`] is a rectangular arrangement of tiles with exactly one
//! [`Tile::Start`] and exactly one [`Tile::Destination`]. It can be built
//! from rows of tiles or parsed from the plain-text map format (see
//! [`TileGrid::parse`]), and answers the adjacency queries every search
//! strategy is built on.

pub mod geom;
pub mod map;
pub mod tile;

pub use geom::Point;
pub use map::{GridError, TileGrid};
pub use tile::Tile;
