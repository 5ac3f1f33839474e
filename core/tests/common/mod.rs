#![allow(dead_code)]

use albumgraph_core::{Album, BalanceGraph, InMemoryCatalog};

pub struct SampleGraph {
    pub a: Album,
    pub b: Album,
    pub c: Album,
    pub d: Album,
    pub graph: BalanceGraph,
}

impl SampleGraph {
    /// Track counts A:1, B:3, C:3, D:5.
    pub fn create() -> Self {
        let a = Album::new(1, "A");
        let b = Album::new(2, "B");
        let c = Album::new(3, "C");
        let d = Album::new(4, "D");

        let graph = BalanceGraph::from_sized_albums(vec![
            (a.clone(), 1),
            (b.clone(), 3),
            (c.clone(), 3),
            (d.clone(), 5),
        ]);

        Self { a, b, c, d, graph }
    }
}

pub fn sized(entries: &[(u32, &str, u32)]) -> Vec<(Album, u32)> {
    entries
        .iter()
        .map(|&(id, title, track_count)| (Album::new(id, title), track_count))
        .collect()
}

pub fn catalog(entries: &[(u32, &str, u32)]) -> InMemoryCatalog {
    InMemoryCatalog::from_albums(sized(entries))
}
