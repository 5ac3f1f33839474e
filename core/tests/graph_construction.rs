mod common;

use albumgraph_core::{
    Album, AlbumRecord, BalanceGraph, CatalogError, GraphError, InMemoryCatalog, JsonCatalog,
};
use common::{SampleGraph, catalog, sized};

#[test]
fn test_sample_graph_edges() {
    let sample = SampleGraph::create();
    let graph = &sample.graph;

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 5);

    assert_eq!(graph.edge_weight(sample.a.id, sample.b.id), Some(2));
    assert_eq!(graph.edge_weight(sample.a.id, sample.c.id), Some(2));
    assert_eq!(graph.edge_weight(sample.a.id, sample.d.id), Some(4));
    assert_eq!(graph.edge_weight(sample.b.id, sample.d.id), Some(2));
    assert_eq!(graph.edge_weight(sample.c.id, sample.d.id), Some(2));

    // Equal track counts give no edge in either direction
    assert_eq!(graph.edge_weight(sample.b.id, sample.c.id), None);
    assert_eq!(graph.edge_weight(sample.c.id, sample.b.id), None);

    // Never against the size order
    assert_eq!(graph.edge_weight(sample.d.id, sample.a.id), None);
}

#[test]
fn test_one_edge_per_unequal_pair() {
    let entries = [
        (1, "One", 1),
        (2, "Two", 3),
        (3, "Three", 3),
        (4, "Four", 5),
        (5, "Five", 5),
        (6, "Six", 8),
    ];
    let graph = BalanceGraph::from_sized_albums(sized(&entries));

    // 15 pairs minus the two equal-count pairs
    assert_eq!(graph.edge_count(), 13);
    assert_eq!(graph.edges().count(), 13);

    for (i, &(first_id, _, first_count)) in entries.iter().enumerate() {
        for &(second_id, _, second_count) in &entries[i + 1..] {
            let forward = graph.edge_weight(first_id, second_id);
            let backward = graph.edge_weight(second_id, first_id);

            if first_count < second_count {
                assert_eq!(forward, Some(second_count - first_count));
                assert_eq!(backward, None);
            } else if first_count > second_count {
                assert_eq!(forward, None);
                assert_eq!(backward, Some(first_count - second_count));
            } else {
                assert_eq!(forward, None);
                assert_eq!(backward, None);
            }
        }
    }
}

#[test]
fn test_edges_point_to_larger_track_count() {
    let graph = BalanceGraph::from_sized_albums(sized(&[
        (10, "Kid A", 10),
        (11, "Amnesiac", 11),
        (12, "OK Computer", 12),
        (13, "In Rainbows", 10),
    ]));

    for (from, to, weight) in graph.edges() {
        assert_ne!(from, to);
        assert!(weight > 0);

        let from_count = graph.track_count(from).unwrap();
        let to_count = graph.track_count(to).unwrap();
        assert!(from_count < to_count);
        assert_eq!(weight, to_count - from_count);
    }
}

#[test]
fn test_duplicate_albums_keep_first_occurrence() {
    let graph = BalanceGraph::from_sized_albums(vec![
        (Album::new(1, "Blue"), 10),
        (Album::new(1, "Blue (Remaster)"), 14),
        (Album::new(2, "Court and Spark"), 11),
    ]);

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.album(1).unwrap().title, "Blue");
    assert_eq!(graph.track_count(1), Some(10));
    assert_eq!(graph.edge_weight(1, 2), Some(1));
}

#[test]
fn test_vertices_and_successors_in_album_order() {
    let graph = BalanceGraph::from_sized_albums(sized(&[
        (3, "Zebra", 1),
        (1, "Mango", 5),
        (2, "Apple", 9),
        (4, "Mango", 7),
    ]));

    let titles: Vec<(&str, u32)> = graph
        .albums()
        .map(|album| (album.title.as_str(), album.id))
        .collect();
    assert_eq!(titles, vec![("Apple", 2), ("Mango", 1), ("Mango", 4), ("Zebra", 3)]);

    let successor_ids: Vec<u32> = graph.successors(3).iter().map(|&(id, _)| id).collect();
    assert_eq!(successor_ids, vec![2, 1, 4]);
}

#[test]
fn test_empty_and_uniform_inputs() {
    let empty = BalanceGraph::from_sized_albums(Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.edge_count(), 0);

    let uniform = BalanceGraph::from_sized_albums(sized(&[(1, "A", 4), (2, "B", 4), (3, "C", 4)]));
    assert_eq!(uniform.vertex_count(), 3);
    assert_eq!(uniform.edge_count(), 0);
}

#[test]
fn test_build_uses_provider_selection() {
    let provider = catalog(&[(1, "Short", 3), (2, "Medium", 8), (3, "Long", 15), (4, "Epic", 30)]);

    let graph = BalanceGraph::build(&provider, 5).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert!(!graph.contains(1));
    assert_eq!(graph.edge_weight(2, 3), Some(7));
    assert_eq!(graph.edge_weight(3, 4), Some(15));
    assert_eq!(graph.edge_weight(2, 4), Some(22));
}

#[test]
fn test_build_propagates_provider_failure() {
    let provider = JsonCatalog::new("/nonexistent/albumgraph/catalog.json");

    let result = BalanceGraph::build(&provider, 0);

    assert!(matches!(
        result,
        Err(GraphError::Catalog(CatalogError::Unavailable { .. }))
    ));
}

#[test]
fn test_build_keeps_first_record_of_repeated_id() {
    let provider = InMemoryCatalog::new(vec![
        AlbumRecord {
            id: 1,
            title: "Blue".to_string(),
            artist: String::new(),
            track_count: 10,
        },
        AlbumRecord {
            id: 1,
            title: "Blue (Remaster)".to_string(),
            artist: String::new(),
            track_count: 14,
        },
        AlbumRecord {
            id: 2,
            title: "Court and Spark".to_string(),
            artist: String::new(),
            track_count: 11,
        },
    ]);

    let graph = BalanceGraph::build(&provider, 0).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.album(1).unwrap().title, "Blue");
    assert_eq!(graph.track_count(1), Some(10));
    assert_eq!(graph.edge_weight(1, 2), Some(1));
    assert_eq!(graph.edge_weight(2, 1), None);
}
