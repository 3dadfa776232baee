//! Local prediction history, kept in SQLite under the data directory.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    pub game: String,
    pub client_seed: String,
    pub server_seed: String,
    /// Game parameters as JSON, if the game takes any.
    pub params: Option<String>,
    /// Prediction payload as JSON.
    pub result: String,
    pub created_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(
        game: &str,
        client_seed: &str,
        server_seed: &str,
        params: Option<String>,
        result: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            game: game.to_string(),
            client_seed: client_seed.to_string(),
            server_seed: server_seed.to_string(),
            params,
            result,
            created_at: Utc::now(),
        }
    }
}

pub struct HistoryStore {
    conn: Mutex<Connection>,
}

impl HistoryStore {
    pub async fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("opening history database {}", db_path.display()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };

        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS predictions (
                id TEXT PRIMARY KEY,
                game TEXT NOT NULL,
                client_seed TEXT NOT NULL,
                server_seed TEXT NOT NULL,
                params TEXT,
                result TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_predictions_game
             ON predictions (game, created_at DESC)",
            [],
        )?;

        Ok(())
    }

    pub async fn record(&self, record: &PredictionRecord) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO predictions (id, game, client_seed, server_seed, params, result, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.game,
                record.client_seed,
                record.server_seed,
                record.params,
                record.result,
                record.created_at.timestamp(),
            ],
        )?;

        tracing::debug!(game = %record.game, id = %record.id, "prediction recorded");
        Ok(())
    }

    pub async fn list(&self, game: Option<&str>, limit: usize) -> Result<Vec<PredictionRecord>> {
        let conn = self.conn.lock().await;

        let mut records = Vec::new();
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<PredictionRecord> {
            Ok(PredictionRecord {
                id: row.get(0)?,
                game: row.get(1)?,
                client_seed: row.get(2)?,
                server_seed: row.get(3)?,
                params: row.get(4)?,
                result: row.get(5)?,
                created_at: DateTime::from_timestamp(row.get(6)?, 0).unwrap_or_else(Utc::now),
            })
        };

        if let Some(game) = game {
            let mut stmt = conn.prepare(
                "SELECT id, game, client_seed, server_seed, params, result, created_at
                 FROM predictions WHERE game = ?1
                 ORDER BY created_at DESC LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![game, limit as i64], map_row)?;
            for row in rows {
                records.push(row?);
            }
        } else {
            let mut stmt = conn.prepare(
                "SELECT id, game, client_seed, server_seed, params, result, created_at
                 FROM predictions
                 ORDER BY created_at DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit as i64], map_row)?;
            for row in rows {
                records.push(row?);
            }
        }

        Ok(records)
    }

    pub async fn count(&self) -> Result<u64> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM predictions", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_record_and_list_roundtrip() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(&dir.path().join("history.db"))
            .await
            .unwrap();

        let record = PredictionRecord::new(
            "mines",
            "client",
            "server",
            Some(r#"{"mine_count":3}"#.to_string()),
            r#"{"safe_cells":[1,2,3]}"#.to_string(),
        );
        store.record(&record).await.unwrap();

        let listed = store.list(None, 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, record.id);
        assert_eq!(listed[0].game, "mines");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_by_game_and_limits() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(&dir.path().join("history.db"))
            .await
            .unwrap();

        for i in 0..5 {
            let game = if i % 2 == 0 { "dice" } else { "keno" };
            let record = PredictionRecord::new(game, "c", "s", None, "{}".to_string());
            store.record(&record).await.unwrap();
        }

        let dice = store.list(Some("dice"), 10).await.unwrap();
        assert_eq!(dice.len(), 3);
        assert!(dice.iter().all(|r| r.game == "dice"));

        let limited = store.list(None, 2).await.unwrap();
        assert_eq!(limited.len(), 2);
    }
}
