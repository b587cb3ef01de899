use sweepgrid_core::{CellView, Game, Result};

pub fn cell_char(view: CellView) -> char {
    match view {
        CellView::Hidden => '.',
        CellView::Flagged => 'F',
        CellView::Number(0) => ' ',
        CellView::Number(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Detonated => '*',
        CellView::ExposedMine => 'm',
    }
}

/// Draws the board with 0-based row and column labels.
pub fn render(game: &Game) -> Result<String> {
    let size = game.size();
    let width = (size.max(1) - 1).to_string().len();
    let mut s = format!("{:width$} |", "");

    for col in 0..size {
        s.push_str(&format!(" {col:>width$}"));
    }
    s.push('\n');
    s.push_str(&"-".repeat(width));
    s.push_str("-+");
    s.push_str(&"-".repeat((width + 1) * usize::from(size)));
    s.push('\n');

    for row in 0..size {
        s.push_str(&format!("{row:>width$} |"));
        for col in 0..size {
            let view = game.describe_cell((row, col))?;
            s.push_str(&format!(" {:>width$}", cell_char(view)));
        }
        s.push('\n');
    }

    Ok(s)
}
