pub mod backend;
pub mod file;
pub mod sqlite;
pub mod traits;

// Re-export
pub use backend::{LeaderboardStore, StoreKind};
pub use file::FileLeaderboardRepository;
pub use sqlite::SqliteLeaderboardRepository;
pub use traits::LeaderboardRepository;
