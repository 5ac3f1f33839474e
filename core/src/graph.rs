use crate::catalog::{Album, AlbumId, CatalogProvider};
use crate::error::{GraphError, GraphResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, time::Instant};
use tracing::{debug, info};

pub type Connection = (AlbumId, u32);

/// Directed graph over albums where every edge points from the album with
/// fewer tracks to the album with more, weighted by the difference.
///
/// Vertices and each adjacency list are kept in album order, so every
/// traversal of the graph is deterministic.
#[derive(Debug, Clone, Default)]
pub struct BalanceGraph {
    albums: FxHashMap<AlbumId, Album>,
    vertex_order: Vec<AlbumId>,
    track_counts: FxHashMap<AlbumId, u32>,
    outgoing: FxHashMap<AlbumId, Vec<Connection>>,
    incoming: FxHashMap<AlbumId, Vec<Connection>>,
    edge_count: usize,
}

impl BalanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the albums selected by `limit` and builds the graph over them.
    pub fn build<P>(provider: &P, limit: u32) -> GraphResult<Self>
    where
        P: CatalogProvider + ?Sized,
    {
        let build_timer = Instant::now();

        let albums = provider.fetch_albums(limit)?;
        let mut sized_albums = Vec::with_capacity(albums.len());
        for album in albums {
            let track_count = provider.track_count(&album)?;
            sized_albums.push((album, track_count));
        }

        let graph = Self::from_sized_albums(sized_albums);

        info!(
            limit,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            elapsed_ms = build_timer.elapsed().as_millis() as u64,
            "Balance graph built"
        );

        Ok(graph)
    }

    /// Builds the graph from albums paired with their track counts.
    ///
    /// A repeated album id keeps its first occurrence. Every unordered pair
    /// is compared once: unequal counts give one edge toward the larger
    /// count, equal counts give none.
    pub fn from_sized_albums(sized_albums: impl IntoIterator<Item = (Album, u32)>) -> Self {
        let mut graph = Self::new();
        let mut seen = FxHashSet::default();
        let mut vertices: Vec<(Album, u32)> = Vec::new();

        for (album, track_count) in sized_albums {
            if seen.insert(album.id) {
                vertices.push((album, track_count));
            } else {
                debug!(album_id = album.id, "Skipping duplicate album");
            }
        }

        vertices.sort_by(|a, b| a.0.cmp(&b.0));

        for (album, track_count) in &vertices {
            graph.vertex_order.push(album.id);
            graph.track_counts.insert(album.id, *track_count);
            graph.outgoing.insert(album.id, Vec::new());
            graph.incoming.insert(album.id, Vec::new());
        }

        // Pairs are visited in index order, so every adjacency list is
        // filled in album order as well.
        for (i, (first, first_count)) in vertices.iter().enumerate() {
            for (second, second_count) in &vertices[i + 1..] {
                match first_count.cmp(second_count) {
                    Ordering::Less => {
                        graph.add_edge(first.id, second.id, second_count - first_count)
                    }
                    Ordering::Greater => {
                        graph.add_edge(second.id, first.id, first_count - second_count)
                    }
                    Ordering::Equal => {}
                }
            }
        }

        graph.albums = vertices
            .into_iter()
            .map(|(album, _)| (album.id, album))
            .collect();

        graph
    }

    fn add_edge(&mut self, from: AlbumId, to: AlbumId, weight: u32) {
        debug_assert!(from != to && weight > 0);

        if let Some(connections) = self.outgoing.get_mut(&from) {
            connections.push((to, weight));
        }
        if let Some(connections) = self.incoming.get_mut(&to) {
            connections.push((from, weight));
        }
        self.edge_count += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_order.is_empty()
    }

    pub fn contains(&self, album_id: AlbumId) -> bool {
        self.albums.contains_key(&album_id)
    }

    pub fn album(&self, album_id: AlbumId) -> Option<&Album> {
        self.albums.get(&album_id)
    }

    /// Vertices in album order.
    pub fn albums(&self) -> impl Iterator<Item = &Album> + '_ {
        self.vertex_order
            .iter()
            .filter_map(|album_id| self.albums.get(album_id))
    }

    pub fn track_count(&self, album_id: AlbumId) -> Option<u32> {
        self.track_counts.get(&album_id).copied()
    }

    pub fn successors(&self, album_id: AlbumId) -> &[Connection] {
        self.outgoing
            .get(&album_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn predecessors(&self, album_id: AlbumId) -> &[Connection] {
        self.incoming
            .get(&album_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn edge_weight(&self, from: AlbumId, to: AlbumId) -> Option<u32> {
        self.successors(from)
            .iter()
            .find(|(target, _)| *target == to)
            .map(|&(_, weight)| weight)
    }

    /// Every edge as `(from, to, weight)`, grouped by source in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (AlbumId, AlbumId, u32)> + '_ {
        self.vertex_order.iter().flat_map(move |&from| {
            self.successors(from)
                .iter()
                .map(move |&(to, weight)| (from, to, weight))
        })
    }

    pub(crate) fn require_vertex(&self, album: &Album) -> GraphResult<AlbumId> {
        if self.contains(album.id) {
            Ok(album.id)
        } else {
            Err(GraphError::UnknownVertex { id: album.id })
        }
    }
}
