use anyhow::Result;
use log::{debug, warn};
use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::models::TaskItem;

const SNAPSHOT_KEY: &str = "tasks";

/// Whole-snapshot persistence over a single key/value table. The entire
/// note list is one JSON blob: every mutation rewrites it, there are no
/// partial writes and no versioning.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default board database at `~/.pinboard.db`.
    pub fn new() -> Result<Self> {
        let home_dir = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let db_path = PathBuf::from(home_dir).join(".pinboard.db");
        Self::open(&db_path)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        debug!("opened board database at {}", path.display());
        Ok(Database { conn })
    }

    /// Read the full note list. An absent or malformed snapshot is treated
    /// as "no data", never as an error the caller has to handle.
    pub fn load_tasks(&self) -> Result<Vec<TaskItem>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(blob) = blob else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!("discarding unreadable snapshot: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and overwrite the snapshot unconditionally.
    pub fn save_tasks(&self, tasks: &[TaskItem]) -> Result<()> {
        let blob = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO snapshots (key, value) VALUES (?1, ?2)",
            [SNAPSHOT_KEY, blob.as_str()],
        )?;
        debug!("saved snapshot of {} note(s)", tasks.len());
        Ok(())
    }

    #[cfg(test)]
    pub fn put_raw_snapshot(&self, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO snapshots (key, value) VALUES (?1, ?2)",
            [SNAPSHOT_KEY, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use tempfile::tempdir;

    fn temp_db() -> (tempfile::TempDir, Database) {
        let dir = tempdir().expect("temp dir");
        let db = Database::open(&dir.path().join("board.db")).expect("open db");
        (dir, db)
    }

    #[test]
    fn empty_database_loads_no_tasks() {
        let (_dir, db) = temp_db();
        assert!(db.load_tasks().unwrap().is_empty());
    }

    #[test]
    fn snapshot_round_trips_field_for_field() {
        let (_dir, db) = temp_db();
        let mut rng = thread_rng();
        for count in [1usize, 5] {
            let tasks: Vec<TaskItem> = (0..count)
                .map(|i| {
                    let mut t = TaskItem::new(&format!("note {i}"), &mut rng);
                    t.completed = i % 2 == 0;
                    t.time = "09:30".to_string();
                    t
                })
                .collect();
            db.save_tasks(&tasks).unwrap();
            assert_eq!(db.load_tasks().unwrap(), tasks);
        }

        // Zero items is a valid snapshot too.
        db.save_tasks(&[]).unwrap();
        assert!(db.load_tasks().unwrap().is_empty());
    }

    #[test]
    fn malformed_snapshot_is_treated_as_empty() {
        let (_dir, db) = temp_db();
        db.put_raw_snapshot("{not json").unwrap();
        assert!(db.load_tasks().unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let (_dir, db) = temp_db();
        let mut rng = thread_rng();
        db.save_tasks(&[TaskItem::new("first", &mut rng)]).unwrap();
        db.save_tasks(&[TaskItem::new("second", &mut rng)]).unwrap();
        let loaded = db.load_tasks().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "second");
    }
}
