#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod game;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// A board needs at least one cell and at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.mines >= self.total_cells() {
            Err(GameError::InvalidConfiguration {
                size: self.size,
                mines: self.mines,
            })
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }
}

/// Hidden mine positions of a square board. Never mutated once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let invalid = || GameError::InvalidConfiguration {
            size: rows.try_into().unwrap_or(Coord::MAX),
            mines: mine_count.try_into().unwrap_or(CellCount::MAX),
        };

        if rows != cols {
            return Err(invalid());
        }
        let size: Coord = rows.try_into().map_err(|_| invalid())?;
        let mine_count: CellCount = mine_count.try_into().map_err(|_| invalid())?;
        GameConfig::new(size, mine_count)?;

        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    /// Builds a layout with mines exactly at `mine_coords`; duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration {
                size,
                mines: mine_coords.len().try_into().unwrap_or(CellCount::MAX),
            });
        }

        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds {
                    row: coords.0,
                    col: coords.1,
                });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    pub fn size(&self) -> Coord {
        // validated on construction
        self.mine_mask.nrows() as Coord
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Out-of-bounds coordinates never hold a mine.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Number of mines in the Chebyshev neighborhood of `coords`, computed on every call.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

/// Player-visible layer laid over a [`MineLayout`] of the same size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    cells: Array2<CellState>,
}

impl Visibility {
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    pub fn for_layout(layout: &MineLayout) -> Self {
        Self::new(layout.size())
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn get(&self, coords: Coord2) -> Option<CellState> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellState)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &state)| ((row as Coord, col as Coord), state))
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(CellState::is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|state| state == CellState::Flagged)
    }

    /// The mine the player stepped on, if any.
    pub fn detonated(&self) -> Option<Coord2> {
        self.iter()
            .find(|&(_, state)| state == CellState::DetonatedMine)
            .map(|(coords, _)| coords)
    }

    pub(crate) fn set(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()] = state;
    }

    fn count_where(&self, pred: impl Fn(CellState) -> bool) -> CellCount {
        // bounded by the area of a board, which fits in CellCount
        self.cells.iter().filter(|&&state| pred(state)).count() as CellCount
    }
}

impl Index<Coord2> for Visibility {
    type Output = CellState;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoOp,
    Detonated,
    /// Every cell that left `Hidden` during this call.
    Revealed(BTreeSet<Coord2>),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            Detonated => true,
            Revealed(_) => true,
        }
    }
}

/// State of a game, derived on demand from the layout and the visibility layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost(Coord2),
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
