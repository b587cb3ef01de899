use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use sweepgrid_core::{CellView, Game, GameOutcome, LayoutGenerator, RandomLayoutGenerator};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::config::{Args, Settings};

mod command;
mod config;
mod render;

fn init_logging(args: &Args) {
    let default_level = args.verbosity.log_level_filter().to_string().to_lowercase();
    // logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let settings = Settings::from_args(&args)?;
    let config = settings.game;
    log::info!(
        "starting {}x{} board with {} mines (seed {})",
        config.size,
        config.size,
        config.mines,
        settings.seed
    );

    let layout = RandomLayoutGenerator::new(settings.seed).generate(config)?;
    let mut game = Game::new(layout);

    println!(
        "{0}x{0} board with {1} mines (seed {2}).",
        config.size, config.mines, settings.seed
    );
    println!("{HELP}");

    play(&mut game, io::stdin().lock(), io::stdout().lock())
}

fn play(game: &mut Game, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "\n{}", render::render(game)?)?;
        writeln!(out, "Mines left: {}", game.mines_left())?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            log::debug!("input closed");
            return Ok(());
        };
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Flag(coords) => {
                if game.layout().validate_coords(coords).is_err() {
                    writeln!(out, "Invalid coordinates. Try again.")?;
                } else if !game.toggle_flag(coords).has_update() {
                    writeln!(out, "That cell is already revealed.")?;
                }
            }
            Command::Reveal(coords) => {
                if let Err(err) = game.layout().validate_coords(coords) {
                    writeln!(out, "{err}. Try again.")?;
                } else if game.describe_cell(coords)? == CellView::Flagged {
                    writeln!(out, "Cell is flagged. Remove the flag or choose another cell.")?;
                } else {
                    game.reveal(coords);
                }
            }
        }

        match game.outcome() {
            GameOutcome::InProgress => {}
            GameOutcome::Lost((row, col)) => {
                game.reveal_all_mines();
                write!(out, "\n{}", render::render(game)?)?;
                writeln!(out, "You hit a mine at {row},{col}! Game over.")?;
                return Ok(());
            }
            GameOutcome::Won => {
                game.reveal_all_mines();
                write!(out, "\n{}", render::render(game)?)?;
                writeln!(out, "Congratulations! You've cleared all the mines!")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepgrid_core::MineLayout;

    fn run(mines: &[(u8, u8)], size: u8, input: &str) -> (Game, String) {
        let mut game = Game::new(MineLayout::from_mine_coords(size, mines).unwrap());
        let mut out = Vec::new();
        play(&mut game, input.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_prints_final_board() {
        let (game, out) = run(&[(0, 0)], 3, "2 2\n");

        assert_eq!(game.outcome(), GameOutcome::Won);
        assert!(out.contains("Congratulations"));
        assert!(out.contains("0 | m 1  "));
    }

    #[test]
    fn losing_game_exposes_mines() {
        let (game, out) = run(&[(0, 0), (2, 2)], 3, "f 2 2\n0 0\n");

        assert_eq!(game.outcome(), GameOutcome::Lost((0, 0)));
        assert!(out.contains("You hit a mine at 0,0"));
        assert!(out.contains("2 | . . m"));
    }

    #[test]
    fn flagged_and_out_of_bounds_reveals_are_refused() {
        let (game, out) = run(&[(0, 0)], 2, "f 1 1\n1 1\n5 5\nf 9 0\nq\n");

        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(out.contains("Cell is flagged"));
        assert!(out.contains("outside the board"));
        assert!(out.contains("Invalid coordinates"));
    }

    #[test]
    fn bad_input_reprompts_until_eof() {
        let (game, out) = run(&[(0, 0)], 2, "hello\n1\n\n");

        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(out.contains("unknown command 'hello'"));
        assert!(out.contains("expected a row and a column"));
    }
}
