use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use rusqlite::{params, Connection};

use crate::model::entry::LeaderboardEntry;
use crate::repository::traits::LeaderboardRepository;

const DEFAULT_DB_NAME: &str = "leaderboard.db";

// Relational variant of the store. Every operation opens its own connection,
// runs one statement and drops it; no connection or transaction is held
// across calls.
#[derive(Clone)]
pub struct SqliteLeaderboardRepository {
    db_path: PathBuf,
}

impl SqliteLeaderboardRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".plastrack")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_DB_NAME);

        Ok(SqliteLeaderboardRepository { db_path: path })
    }

    // The schema statement is idempotent, so every connection gets an
    // initialized table without a separate setup step. AUTOINCREMENT keeps
    // ids monotonic across deletions.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS leaderboard (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                name TEXT NOT NULL,
                per_day REAL NOT NULL,
                per_year REAL NOT NULL,
                per_year_kg REAL NOT NULL
            )",
            [],
        )?;
        Ok(conn)
    }
}

impl LeaderboardRepository for SqliteLeaderboardRepository {
    fn append(&self, mut entry: LeaderboardEntry) -> Result<LeaderboardEntry> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO leaderboard (username, name, per_day, per_year, per_year_kg)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.username,
                entry.name,
                entry.per_day,
                entry.per_year,
                entry.per_year_kg
            ],
        )?;
        entry.id = conn.last_insert_rowid() as u64;
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<LeaderboardEntry>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, username, name, per_day, per_year, per_year_kg FROM leaderboard",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(LeaderboardEntry {
                id: row.get::<_, i64>(0)? as u64,
                username: row.get(1)?,
                name: row.get(2)?,
                per_day: row.get(3)?,
                per_year: row.get(4)?,
                per_year_kg: row.get(5)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    fn delete(&self, id: u64) -> Result<()> {
        let conn = self.connect()?;
        // Matching zero rows is not an error.
        conn.execute("DELETE FROM leaderboard WHERE id = ?1", params![id as i64])?;
        Ok(())
    }

    fn delete_all(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM leaderboard", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::ConsumptionTotals;

    fn entry(name: &str, per_day: f64) -> LeaderboardEntry {
        LeaderboardEntry::new(name, ConsumptionTotals::from_per_day(per_day))
    }

    #[test]
    fn test_append_assigns_monotonic_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let first = repo.append(entry("Alice", 50.0)).unwrap();
        let second = repo.append(entry("Bob", 12.0)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        repo.delete(second.id).unwrap();
        let third = repo.append(entry("Carol", 30.0)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let stored = repo.append(entry("Alice Smith", 50.0)).unwrap();
        let listed = repo.list().unwrap();
        assert_eq!(listed, vec![stored.clone()]);
        assert_eq!(stored.username, "alice_smith");
        assert_eq!(stored.per_year, 18250.0);
        assert_eq!(stored.per_year_kg, 18.25);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let a = repo.append(entry("Alice", 10.0)).unwrap();
        let b = repo.append(entry("Bob", 20.0)).unwrap();

        repo.delete(a.id).unwrap();
        let remaining = repo.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
    }

    #[test]
    fn test_delete_missing_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.append(entry("Alice", 10.0)).unwrap();
        repo.delete(999).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_empties_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.append(entry("Alice", 10.0)).unwrap();
        repo.append(entry("Bob", 20.0)).unwrap();
        repo.delete_all().unwrap();
        assert!(repo.list().unwrap().is_empty());
    }
}
