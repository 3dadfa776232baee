pub mod commit;
pub mod history;
pub mod predict;

use crate::history::{HistoryStore, PredictionRecord};
use anyhow::Result;
use dialoguer::Input;
use serde::Serialize;
use stakecast_games::{generate_server_seed, SeedPair};

/// Seed flags shared by every predict subcommand.
#[derive(Debug, clap::Args)]
pub struct SeedArgs {
    /// Client seed string
    #[arg(long)]
    pub client_seed: Option<String>,

    /// Server seed string
    #[arg(long)]
    pub server_seed: Option<String>,

    /// Generate both seeds instead of prompting for missing ones
    #[arg(long)]
    pub random: bool,
}

impl SeedArgs {
    /// Turn the flags into a complete seed pair.
    ///
    /// `--random` generates both sides and prints them so the draw stays
    /// reproducible after the fact; otherwise missing seeds are prompted
    /// for interactively.
    pub fn resolve(self) -> Result<SeedPair> {
        if self.random {
            let pair = SeedPair::new(generate_server_seed(), generate_server_seed());
            println!("Generated client seed: {}", pair.client_seed);
            println!("Generated server seed: {}", pair.server_seed);
            return Ok(pair);
        }

        let client_seed = match self.client_seed {
            Some(seed) if !seed.is_empty() => seed,
            _ => Input::new().with_prompt("Client seed").interact_text()?,
        };
        let server_seed = match self.server_seed {
            Some(seed) if !seed.is_empty() => seed,
            _ => Input::new().with_prompt("Server seed").interact_text()?,
        };

        Ok(SeedPair::new(client_seed, server_seed))
    }
}

/// Persist a prediction to the history store.
pub async fn save_prediction<T: Serialize>(
    store: &HistoryStore,
    game: &str,
    seeds: &SeedPair,
    params: Option<serde_json::Value>,
    prediction: &T,
) -> Result<()> {
    let record = PredictionRecord::new(
        game,
        &seeds.client_seed,
        &seeds.server_seed,
        params.map(|p| p.to_string()),
        serde_json::to_string(prediction)?,
    );
    store.record(&record).await
}

/// Render a cell board as rows of marked/unmarked slots.
pub fn render_board(safe_cells: &[usize], total_cells: usize, columns: usize) -> String {
    let mut out = String::new();
    for cell in 0..total_cells {
        if safe_cells.contains(&cell) {
            out.push_str("[x]");
        } else {
            out.push_str("[ ]");
        }
        if (cell + 1) % columns == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    if total_cells % columns != 0 {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_shapes_rows() {
        let board = render_board(&[0, 3], 6, 3);
        assert_eq!(board, "[x] [ ] [ ]\n[x] [ ] [ ]\n");
    }

    #[test]
    fn test_render_board_ragged_last_row() {
        let board = render_board(&[], 16, 6);
        assert_eq!(board.lines().count(), 3);
    }
}
