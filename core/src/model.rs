use crate::balance::{self, AlbumBalance};
use crate::catalog::{Album, CatalogProvider};
use crate::error::{GraphError, GraphResult};
use crate::graph::BalanceGraph;
use crate::pathfinding::{BestPathResult, find_best_path};
use crate::pathfinding_config::PathSearchConfig;
use crate::string_normalization::{TitleLookup, build_title_lookup, find_best_title_match};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub limit: u32,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// A session over one catalog: holds the most recently built graph and
/// answers balance and path queries against it.
pub struct AlbumGraphModel<P> {
    provider: P,
    graph: BalanceGraph,
    title_lookup: TitleLookup,
}

impl<P: CatalogProvider> AlbumGraphModel<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            graph: BalanceGraph::new(),
            title_lookup: TitleLookup::default(),
        }
    }

    /// Rebuilds the graph from scratch. If the provider fails, the session
    /// is left with an empty graph and the failure is returned.
    pub fn build(&mut self, limit: u32) -> GraphResult<GraphSummary> {
        match BalanceGraph::build(&self.provider, limit) {
            Ok(graph) => {
                self.install(graph);
                Ok(GraphSummary {
                    limit,
                    vertex_count: self.graph.vertex_count(),
                    edge_count: self.graph.edge_count(),
                })
            }
            Err(error) => {
                warn!(limit, %error, "Catalog provider failed, graph left empty");
                self.install(BalanceGraph::new());
                Err(error)
            }
        }
    }

    fn install(&mut self, graph: BalanceGraph) {
        self.title_lookup = build_title_lookup(graph.albums());
        self.graph = graph;
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn graph(&self) -> &BalanceGraph {
        &self.graph
    }

    pub fn list_albums(&self) -> Vec<Album> {
        self.graph.albums().cloned().collect()
    }

    /// Resolves a title, falling back to a numeric album id so albums with
    /// identical titles stay reachable.
    pub fn find_album(&self, title: &str) -> GraphResult<Album> {
        find_best_title_match(title, &self.title_lookup)
            .or_else(|| {
                let album_id = title.trim().trim_start_matches('#').parse().ok()?;
                self.graph.album(album_id)
            })
            .cloned()
            .ok_or_else(|| GraphError::AlbumNotFound {
                query: title.to_string(),
            })
    }

    pub fn balance_of(&self, album: &Album) -> GraphResult<i64> {
        balance::balance_of(&self.graph, album)
    }

    pub fn max_balance_vertex(&self) -> Option<Album> {
        balance::max_balance_vertex(&self.graph).cloned()
    }

    pub fn successors_with_balance(&self, album: &Album) -> GraphResult<Vec<AlbumBalance>> {
        balance::successors_with_balance(&self.graph, album)
    }

    pub fn find_best_path(
        &self,
        start: &Album,
        target: &Album,
        threshold: i64,
    ) -> GraphResult<BestPathResult> {
        find_best_path(&self.graph, start, target, &PathSearchConfig::new(threshold))
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
