use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json;

use crate::model::entry::LeaderboardEntry;
use crate::repository::traits::LeaderboardRepository;

const DEFAULT_FILE_NAME: &str = "leaderboard.json";

// The whole board lives in one document. next_id is stored alongside the
// entries so ids stay monotonic even after the highest row is deleted.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct BoardDocument {
    next_id: u64,
    entries: Vec<LeaderboardEntry>,
}

impl Default for BoardDocument {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct FileLeaderboardRepository {
    file_path: PathBuf,
}

impl FileLeaderboardRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".plastrack")
            }
        };
        fs::create_dir_all(&path)?; // Ensure the directory exists
        path.push(DEFAULT_FILE_NAME);

        // Ensure the file itself exists; create if it doesn't
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &BoardDocument::default())?;
            writer.flush()?;
        }

        Ok(FileLeaderboardRepository { file_path: path })
    }

    fn read_document(&self) -> Result<BoardDocument> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let document = serde_json::from_reader(reader)?;
        Ok(document)
    }

    fn write_document(&self, document: &BoardDocument) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
        Ok(())
    }
}

impl LeaderboardRepository for FileLeaderboardRepository {
    fn append(&self, mut entry: LeaderboardEntry) -> Result<LeaderboardEntry> {
        let mut document = self.read_document()?;
        entry.id = document.next_id;
        document.next_id += 1;
        document.entries.push(entry.clone());
        self.write_document(&document)?;
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.read_document()?.entries)
    }

    fn delete(&self, id: u64) -> Result<()> {
        let mut document = self.read_document()?;
        document.entries.retain(|e| e.id != id);
        // Matching zero rows is fine; the write is still a no-op rewrite.
        self.write_document(&document)
    }

    fn delete_all(&self) -> Result<()> {
        let mut document = self.read_document()?;
        document.entries.clear();
        self.write_document(&document)
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
        let repo = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let first = repo.append(entry("Alice", 50.0)).unwrap();
        let second = repo.append(entry("Bob", 12.0)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        // Deleting the highest row must not free its id for reuse.
        repo.delete(second.id).unwrap();
        let third = repo.append(entry("Carol", 30.0)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.append(entry("Alice", 10.0)).unwrap();
        repo.append(entry("Bob", 90.0)).unwrap();

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

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
        let repo = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.append(entry("Alice", 10.0)).unwrap();
        repo.delete(999).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_empties_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.append(entry("Alice", 10.0)).unwrap();
        repo.append(entry("Bob", 20.0)).unwrap();
        repo.delete_all().unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_reads_persisted_entries() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();
            repo.append(entry("Alice", 50.0)).unwrap();
        }
        let reopened = FileLeaderboardRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let entries = reopened.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].per_year_kg, 18.25);
    }
}
