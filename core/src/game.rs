use rand::Rng;

use crate::*;

/// Generates a fresh layout and an all-hidden visibility layer for it.
pub fn new_game<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<(MineLayout, Visibility)> {
    let layout = generate(config, rng)?;
    let visibility = Visibility::for_layout(&layout);
    Ok((layout, visibility))
}

/// One game session: a fixed mine layout plus the player's view of it.
///
/// Moves are rejected as no-ops once the game is won or lost.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    layout: MineLayout,
    visibility: Visibility,
}

impl Game {
    pub fn new(layout: MineLayout) -> Self {
        let visibility = Visibility::for_layout(&layout);
        Self { layout, visibility }
    }

    pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let (layout, visibility) = new_game(config, rng)?;
        Ok(Self { layout, visibility })
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Mines minus placed flags; goes negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.layout.mine_count() as isize) - (self.visibility.flagged_count() as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        self.visibility.get(coords)
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.layout, &self.visibility)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_finished() {
            return RevealOutcome::NoOp;
        }

        let result = reveal(&self.layout, &mut self.visibility, coords);
        if result.has_update() && check_win(&self.layout, &self.visibility) {
            log::debug!("board cleared");
        }
        result
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_finished() {
            return MarkOutcome::NoChange;
        }

        toggle_flag(&mut self.visibility, coords)
    }

    pub fn check_win(&self) -> bool {
        check_win(&self.layout, &self.visibility)
    }

    pub fn describe_cell(&self, coords: Coord2) -> Result<CellView> {
        describe_cell(&self.visibility, coords)
    }

    /// Uncovers the remaining mines once the game is over; does nothing while it is in progress.
    pub fn reveal_all_mines(&mut self) {
        if !self.is_finished() {
            return;
        }

        reveal_all_mines(&self.layout, &mut self.visibility);
    }
}
