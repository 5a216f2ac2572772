pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use input::{expand_key, parse_args, ParsedInput};
pub use model::catalog::{Product, ProductCatalog};
pub use model::entry::{slugify, ConsumptionTotals, LeaderboardEntry};
pub use repository::{
    FileLeaderboardRepository, LeaderboardRepository, LeaderboardStore,
    SqliteLeaderboardRepository, StoreKind,
};
pub use service::calculator::calculate_totals;
pub use service::leaderboard_service::{rank_entries, write_csv, LeaderboardService};
