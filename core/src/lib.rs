#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use path::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod path;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub blockers: CellCount,
}

impl GameConfig {
    /// Reference board dimensions.
    pub const DEFAULT_SIZE: Coord2 = (11, 11);
    /// Default difficulty: blockers seeded before the first move.
    pub const DEFAULT_BLOCKERS: CellCount = 10;

    // Each axis needs at least three cells so the starting cat cell is not
    // itself a border cell.
    const MIN_AXIS: Coord = 3;

    pub const fn new_unchecked(size: Coord2, blockers: CellCount) -> Self {
        Self { size, blockers }
    }

    pub fn new((size_x, size_y): Coord2, blockers: CellCount) -> Self {
        let size_x = size_x.clamp(Self::MIN_AXIS, Coord::MAX);
        let size_y = size_y.clamp(Self::MIN_AXIS, Coord::MAX);
        let blockers = blockers.min(mult(size_x, size_y) - 1);
        Self::new_unchecked((size_x, size_y), blockers)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Starting cat cell: the board center, rounded down.
    pub const fn center(&self) -> Coord2 {
        (self.size.0 / 2, self.size.1 / 2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_BLOCKERS)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// All-open board of the given size, without a cat.
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Build a board from an explicit position, for setups not produced by a
    /// generator.
    pub fn from_layout(size: Coord2, cat: Coord2, blocked: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size);
        board.validate_coords(cat)?;
        board[cat] = Cell::Cat;

        for &coords in blocked {
            board.validate_coords(coords)?;
            if coords == cat {
                return Err(GameError::BlockedCatCell);
            }
            board[coords] = Cell::Blocked;
        }

        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    /// Whether the coordinate lies on the outer boundary of the board.
    pub fn is_edge(&self, (x, y): Coord2) -> bool {
        let (size_x, size_y) = self.size();
        x == 0 || y == 0 || x == size_x - 1 || y == size_y - 1
    }

    pub fn blocked_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_blocked())
            .count()
            .try_into()
            .unwrap()
    }

    /// Locate the cat cell, if any.
    pub fn cat(&self) -> Option<Coord2> {
        self.cat_cells().next()
    }

    pub(crate) fn cat_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells.indexed_iter().filter_map(|((x, y), cell)| {
            cell.has_cat().then_some((x as Coord, y as Coord))
        })
    }

    /// In-bounds hex neighbors of `coords`, in direction-table order.
    pub fn neighbors(&self, coords: Coord2) -> SmallVec<[Coord2; 6]> {
        self.cells.iter_neighbors(coords).collect()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.cells[(x as usize, y as usize)]
    }
}

/// Outcome of a blocker placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Advanced,
    Trapped,
    Escaped,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a hint request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HintOutcome {
    NoChange,
    Placed(Coord2),
    Trapped,
    Escaped,
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
