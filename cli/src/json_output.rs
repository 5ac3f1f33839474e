use albumgraph_core::{AlbumId, BalanceGraph, BestPathResult, balance_of};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub threshold: i64,
    pub min_tracks: u32,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub score: usize,
    pub reference_balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonAlbum>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonAlbum {
    pub id: AlbumId,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub artist: String,
    pub track_count: u32,
    pub balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_from_previous: Option<u32>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub complete_paths: usize,
}

pub fn create_json_output(
    result: &BestPathResult,
    graph: &BalanceGraph,
    query: JsonQuery,
) -> JsonOutput {
    let json_path = result.is_found().then(|| {
        result
            .path
            .iter()
            .enumerate()
            .map(|(i, album)| JsonAlbum {
                id: album.id,
                title: album.title.clone(),
                artist: album.artist.clone(),
                track_count: graph.track_count(album.id).unwrap_or_default(),
                balance: balance_of(graph, album).unwrap_or_default(),
                weight_from_previous: if i > 0 {
                    graph.edge_weight(result.path[i - 1].id, album.id)
                } else {
                    None
                },
            })
            .collect()
    });

    JsonOutput {
        query,
        result: JsonResult {
            found: result.is_found(),
            score: result.score,
            reference_balance: result.reference_balance,
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            complete_paths: result.complete_paths,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
