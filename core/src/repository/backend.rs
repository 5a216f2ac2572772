use std::path::PathBuf;

use anyhow::Result;

use crate::model::entry::LeaderboardEntry;
use crate::repository::file::FileLeaderboardRepository;
use crate::repository::sqlite::SqliteLeaderboardRepository;
use crate::repository::traits::LeaderboardRepository;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreKind {
    File,
    Sqlite,
}

impl Default for StoreKind {
    fn default() -> Self {
        StoreKind::File
    }
}

// Both backends satisfy the same capability; this enum lets the binary pick
// one at runtime without making every caller generic over the repository.
#[derive(Clone)]
pub enum LeaderboardStore {
    File(FileLeaderboardRepository),
    Sqlite(SqliteLeaderboardRepository),
}

impl LeaderboardStore {
    pub fn open(kind: StoreKind, base_dir: Option<PathBuf>) -> Result<Self> {
        match kind {
            StoreKind::File => Ok(LeaderboardStore::File(FileLeaderboardRepository::new(
                base_dir,
            )?)),
            StoreKind::Sqlite => Ok(LeaderboardStore::Sqlite(SqliteLeaderboardRepository::new(
                base_dir,
            )?)),
        }
    }
}

impl LeaderboardRepository for LeaderboardStore {
    fn append(&self, entry: LeaderboardEntry) -> Result<LeaderboardEntry> {
        match self {
            LeaderboardStore::File(repo) => repo.append(entry),
            LeaderboardStore::Sqlite(repo) => repo.append(entry),
        }
    }

    fn list(&self) -> Result<Vec<LeaderboardEntry>> {
        match self {
            LeaderboardStore::File(repo) => repo.list(),
            LeaderboardStore::Sqlite(repo) => repo.list(),
        }
    }

    fn delete(&self, id: u64) -> Result<()> {
        match self {
            LeaderboardStore::File(repo) => repo.delete(id),
            LeaderboardStore::Sqlite(repo) => repo.delete(id),
        }
    }

    fn delete_all(&self) -> Result<()> {
        match self {
            LeaderboardStore::File(repo) => repo.delete_all(),
            LeaderboardStore::Sqlite(repo) => repo.delete_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{ConsumptionTotals, LeaderboardEntry};

    #[test]
    fn test_both_backends_honor_the_same_contract() {
        for kind in [StoreKind::File, StoreKind::Sqlite] {
            let dir = tempfile::tempdir().unwrap();
            let store = LeaderboardStore::open(kind, Some(dir.path().to_path_buf())).unwrap();

            let entry =
                LeaderboardEntry::new("Alice", ConsumptionTotals::from_per_day(50.0));
            let stored = store.append(entry).unwrap();
            assert_eq!(stored.id, 1);
            assert_eq!(store.list().unwrap().len(), 1);

            store.delete(stored.id).unwrap();
            assert!(store.list().unwrap().is_empty());
        }
    }
}
