//! Board settings, merged from command-line flags, an optional TOML file and the difficulty presets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use serde::Deserialize;
use sweepgrid_core::{CellCount, Coord, GameConfig};

/// Find every mine by reading the numbers around revealed cells
#[derive(Parser, Debug)]
#[command(name = "sweepgrid", version)]
pub struct Args {
    /// Board preset
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Side length of the square board, overrides the preset
    #[arg(long)]
    pub size: Option<Coord>,

    /// Number of mines, overrides the preset
    #[arg(long)]
    pub mines: Option<CellCount>,

    /// Seed for mine placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with `difficulty`, `size`, `mines` and `seed` keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

/// Classic board presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        use Difficulty::*;
        match difficulty {
            Beginner => GameConfig::new_unchecked(9, 10),
            Intermediate => GameConfig::new_unchecked(16, 50),
            Expert => GameConfig::new_unchecked(24, 100),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub difficulty: Option<Difficulty>,
    pub size: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: u64,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, &file, rand::random)
    }

    /// Flags win over the file, and the file wins over the preset.
    pub fn resolve(args: &Args, file: &FileConfig, random_seed: impl FnOnce() -> u64) -> Result<Self> {
        let difficulty = args.difficulty.or(file.difficulty).unwrap_or_default();
        let preset = GameConfig::from(difficulty);

        let size = args.size.or(file.size).unwrap_or(preset.size);
        let mines = args.mines.or(file.mines).unwrap_or(preset.mines);
        let game = GameConfig::new(size, mines).context("invalid board settings")?;
        let seed = args.seed.or(file.seed).unwrap_or_else(random_seed);

        Ok(Self { game, seed })
    }
}
