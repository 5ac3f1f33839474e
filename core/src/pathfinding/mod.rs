pub mod constrained;
pub mod utils;

// Re-export the public functions
pub use constrained::find_best_path;
pub use utils::{BestPathResult, score_path};
