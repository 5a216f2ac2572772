use crate::model::entry::LeaderboardEntry;
use anyhow::Result;

// Capability over the leaderboard store. Either backend (JSON document or
// SQLite table) satisfies it interchangeably.
pub trait LeaderboardRepository {
    /// Appends the entry and assigns the next id. Whatever id the caller
    /// passes in is ignored.
    fn append(&self, entry: LeaderboardEntry) -> Result<LeaderboardEntry>;
    /// All rows in storage-native order. Ranking is the caller's job.
    fn list(&self) -> Result<Vec<LeaderboardEntry>>;
    /// Deleting an id that matches no row succeeds as a no-op.
    fn delete(&self, id: u64) -> Result<()>;
    fn delete_all(&self) -> Result<()>;
}
