use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Reveals the cell at `coords`, flooding outwards through zero-count cells.
///
/// Out-of-bounds coordinates, cells that are not [`CellState::Hidden`] and a visibility layer
/// built for a different board size are left untouched. Stepping on a mine only marks that one cell; uncovering the rest of the board is up to the
/// caller (see [`reveal_all_mines`]).
pub fn reveal(layout: &MineLayout, visibility: &mut Visibility, coords: Coord2) -> RevealOutcome {
    if visibility.size() != layout.size() || visibility.get(coords) != Some(CellState::Hidden) {
        return RevealOutcome::NoOp;
    }

    if layout.contains_mine(coords) {
        visibility.set(coords, CellState::DetonatedMine);
        log::debug!("mine detonated at {:?}", coords);
        return RevealOutcome::Detonated;
    }

    let mut revealed = BTreeSet::new();
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        // a cell may be queued by several zero neighbors before it is reached
        if visibility[visit_coords] != CellState::Hidden {
            continue;
        }

        let adjacent_mines = layout.adjacent_mine_count(visit_coords);
        visibility.set(visit_coords, CellState::Revealed(adjacent_mines));
        revealed.insert(visit_coords);

        if adjacent_mines == 0 {
            // no neighbor of a zero cell is a mine
            to_visit.extend(
                layout
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| visibility[pos] == CellState::Hidden),
            );
        }
    }

    log::trace!("revealed {} cells from {:?}", revealed.len(), coords);
    RevealOutcome::Revealed(revealed)
}

/// Toggles a flag on a hidden cell. Anything else, including out-of-bounds coordinates, is a no-op.
pub fn toggle_flag(visibility: &mut Visibility, coords: Coord2) -> MarkOutcome {
    use CellState::*;
    use MarkOutcome::*;

    match visibility.get(coords) {
        Some(Hidden) => {
            visibility.set(coords, Flagged);
            Changed
        }
        Some(Flagged) => {
            visibility.set(coords, Hidden);
            Changed
        }
        _ => NoChange,
    }
}

/// Whether every safe cell has been revealed. Flags never count, even on the right cells.
pub fn check_win(layout: &MineLayout, visibility: &Visibility) -> bool {
    visibility.revealed_count() == layout.safe_cell_count()
}

pub fn describe_cell(visibility: &Visibility, coords: Coord2) -> Result<CellView> {
    visibility
        .get(coords)
        .map(CellView::from)
        .ok_or(GameError::OutOfBounds {
            row: coords.0,
            col: coords.1,
        })
}

/// End-of-game presentation step: uncovers every mine that is still hidden or flagged.
///
/// The detonated mine, if any, keeps its state.
pub fn reveal_all_mines(layout: &MineLayout, visibility: &mut Visibility) {
    if visibility.size() != layout.size() {
        return;
    }

    for coords in layout.mine_coords() {
        if visibility[coords].is_unrevealed() {
            visibility.set(coords, CellState::RevealedMine);
        }
    }
}

/// Derives the state of the game without storing it anywhere.
pub fn outcome(layout: &MineLayout, visibility: &Visibility) -> GameOutcome {
    if let Some(coords) = visibility.detonated() {
        GameOutcome::Lost(coords)
    } else if check_win(layout, visibility) {
        GameOutcome::Won
    } else {
        GameOutcome::InProgress
    }
}
