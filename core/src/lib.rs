pub mod balance;
pub mod catalog;
pub mod error;
pub mod graph;
pub mod model;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod string_normalization;

// Re-export commonly used items
pub use balance::{
    AlbumBalance, BalanceTable, all_balances, balance_of, max_balance_vertex,
    successors_with_balance,
};
pub use catalog::{Album, AlbumId, AlbumRecord, CatalogProvider, InMemoryCatalog, JsonCatalog};
pub use error::{CatalogError, GraphError, GraphResult};
pub use graph::BalanceGraph;
pub use model::{AlbumGraphModel, GraphSummary};
pub use pathfinding::{BestPathResult, find_best_path, score_path};
pub use pathfinding_config::PathSearchConfig;
