use crate::history::HistoryStore;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

pub async fn show_history(
    store: &HistoryStore,
    game: Option<String>,
    limit: usize,
) -> Result<()> {
    let records = store.list(game.as_deref(), limit).await?;

    if records.is_empty() {
        println!("No predictions recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Time (UTC)", "Game", "Client seed", "Server seed", "Result"]);

    for record in &records {
        table.add_row(vec![
            record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.game.clone(),
            truncate(&record.client_seed, 16),
            truncate(&record.server_seed, 16),
            truncate(&record.result, 48),
        ]);
    }

    println!("{table}");
    println!("Total predictions stored: {}", store.count().await?);

    Ok(())
}

fn truncate(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        input.to_string()
    } else {
        let head: String = input.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate("abc", 16), "abc");
    }

    #[test]
    fn test_truncate_marks_long_strings() {
        let long = "a".repeat(30);
        let out = truncate(&long, 16);
        assert!(out.ends_with('…'));
        assert_eq!(out.chars().count(), 16);
    }
}
