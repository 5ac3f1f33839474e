use crate::balance::balance_of;
use crate::catalog::{Album, AlbumId};
use crate::error::GraphResult;
use crate::graph::BalanceGraph;
use serde::Serialize;

/// Outcome of one constrained best-path search.
#[derive(Debug, Clone, Serialize)]
pub struct BestPathResult {
    /// Best path from start to target, empty when the target is unreachable.
    pub path: Vec<Album>,
    /// Vertices on `path` whose balance exceeds `reference_balance`.
    pub score: usize,
    pub reference_balance: i64,
    /// Complete start-to-target paths examined.
    pub complete_paths: usize,
    pub search_duration: f64,
}

impl BestPathResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Counts the albums of `path` whose balance is strictly greater than
/// `reference_balance`.
pub fn score_path(
    graph: &BalanceGraph,
    path: &[Album],
    reference_balance: i64,
) -> GraphResult<usize> {
    let mut count = 0;
    for album in path {
        if balance_of(graph, album)? > reference_balance {
            count += 1;
        }
    }
    Ok(count)
}

pub fn resolve_path(graph: &BalanceGraph, path: &[AlbumId]) -> Vec<Album> {
    path.iter()
        .filter_map(|album_id| graph.album(*album_id).cloned())
        .collect()
}
