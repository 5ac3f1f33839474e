use crate::catalog::{Album, AlbumId};
use crate::error::GraphResult;
use crate::graph::BalanceGraph;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// An album paired with its balance in the graph it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumBalance {
    pub album: Album,
    pub balance: i64,
}

impl AlbumBalance {
    pub fn new(album: Album, balance: i64) -> Self {
        Self { album, balance }
    }
}

impl PartialOrd for AlbumBalance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlbumBalance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.balance
            .cmp(&other.balance)
            .then_with(|| self.album.cmp(&other.album))
    }
}

fn vertex_balance(graph: &BalanceGraph, album_id: AlbumId) -> i64 {
    let incoming: i64 = graph
        .predecessors(album_id)
        .iter()
        .map(|&(_, weight)| i64::from(weight))
        .sum();
    let outgoing: i64 = graph
        .successors(album_id)
        .iter()
        .map(|&(_, weight)| i64::from(weight))
        .sum();

    incoming - outgoing
}

/// Incoming edge weight minus outgoing edge weight at `album`.
pub fn balance_of(graph: &BalanceGraph, album: &Album) -> GraphResult<i64> {
    let album_id = graph.require_vertex(album)?;
    Ok(vertex_balance(graph, album_id))
}

/// The vertex with the strictly greatest balance, first in album order on
/// ties. `None` for an empty graph.
pub fn max_balance_vertex(graph: &BalanceGraph) -> Option<&Album> {
    let mut best: Option<(&Album, i64)> = None;

    for album in graph.albums() {
        let balance = vertex_balance(graph, album.id);
        match best {
            Some((_, best_balance)) if balance <= best_balance => {}
            _ => best = Some((album, balance)),
        }
    }

    best.map(|(album, _)| album)
}

/// Direct successors of `album` with their balances, ascending by balance.
pub fn successors_with_balance(
    graph: &BalanceGraph,
    album: &Album,
) -> GraphResult<Vec<AlbumBalance>> {
    let album_id = graph.require_vertex(album)?;

    let mut successors: Vec<AlbumBalance> = graph
        .successors(album_id)
        .iter()
        .filter_map(|&(successor_id, _)| {
            let successor = graph.album(successor_id)?.clone();
            Some(AlbumBalance::new(successor, vertex_balance(graph, successor_id)))
        })
        .collect();

    successors.sort();
    Ok(successors)
}

/// Every vertex with its balance, ascending by balance.
pub fn all_balances(graph: &BalanceGraph) -> Vec<AlbumBalance> {
    let mut balances: Vec<AlbumBalance> = graph
        .albums()
        .map(|album| AlbumBalance::new(album.clone(), vertex_balance(graph, album.id)))
        .collect();

    balances.sort();
    balances
}

/// Balances of every vertex, computed once for repeated lookups.
#[derive(Debug, Clone, Default)]
pub struct BalanceTable {
    balances: FxHashMap<AlbumId, i64>,
}

impl BalanceTable {
    pub fn compute(graph: &BalanceGraph) -> Self {
        let balances = graph
            .albums()
            .map(|album| (album.id, vertex_balance(graph, album.id)))
            .collect();
        Self { balances }
    }

    pub fn get(&self, album_id: AlbumId) -> Option<i64> {
        self.balances.get(&album_id).copied()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
