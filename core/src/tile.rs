use serde::{Deserialize, Serialize};

/// Canonical player-visible state of a single cell.
///
/// Only `Hidden` and `Flagged` can transition; every other state is terminal for its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    /// Safe cell, carrying its adjacent mine count (0-8).
    Revealed(u8),
    /// Mine uncovered by the end-of-game presentation step.
    RevealedMine,
    /// The mine the player stepped on.
    DetonatedMine,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    /// Whether this is a safe cell the player uncovered. Only these count toward a win; mines
    /// exposed at the end of the game do not.
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What a renderer should draw for a cell. The core never formats cells itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Number(u8),
    Detonated,
    ExposedMine,
}

impl From<CellState> for CellView {
    fn from(state: CellState) -> Self {
        use CellState::*;
        match state {
            Hidden => CellView::Hidden,
            Flagged => CellView::Flagged,
            Revealed(count) => CellView::Number(count),
            RevealedMine => CellView::ExposedMine,
            DetonatedMine => CellView::Detonated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_safe_reveals_count_as_revealed() {
        assert!(CellState::Revealed(0).is_revealed());
        assert!(!CellState::RevealedMine.is_revealed());
        assert!(!CellState::DetonatedMine.is_revealed());
        assert!(!CellState::Flagged.is_revealed());
        assert!(!CellState::Hidden.is_revealed());
    }

    #[test]
    fn view_maps_every_state() {
        assert_eq!(CellView::from(CellState::Hidden), CellView::Hidden);
        assert_eq!(CellView::from(CellState::Flagged), CellView::Flagged);
        assert_eq!(CellView::from(CellState::Revealed(3)), CellView::Number(3));
        assert_eq!(CellView::from(CellState::RevealedMine), CellView::ExposedMine);
        assert_eq!(CellView::from(CellState::DetonatedMine), CellView::Detonated);
    }
}
