use albumgraph_core::{Album, AlbumBalance, BalanceGraph, BestPathResult, GraphSummary, balance_of};
use std::path::Path;

use crate::colors::ColorScheme;
use crate::utils::format_number;

pub fn display_build_info(summary: &GraphSummary, catalog_path: &Path, colors: &ColorScheme) {
    println!("📀 Catalog: {}", catalog_path.display());
    println!(
        "⚙️  Albums with more than {} tracks",
        colors.number(&summary.limit.to_string())
    );
    println!(
        "🔗 Graph built: {} albums, {} edges",
        colors.number(&format_number(summary.vertex_count)),
        colors.number(&format_number(summary.edge_count))
    );
}

pub fn display_summary(graph: &BalanceGraph, max_balance: Option<&Album>, colors: &ColorScheme) {
    println!(
        "{} albums, {} edges",
        colors.number(&format_number(graph.vertex_count())),
        colors.number(&format_number(graph.edge_count()))
    );

    match max_balance {
        Some(album) => {
            let balance = balance_of(graph, album).unwrap_or_default();
            println!(
                "🏆 Highest balance: {} {}",
                colors.album_title(&format!("\"{}\"", album.title)),
                colors.balance(balance)
            );
        }
        None => println!("{}", colors.error("❌ The graph has no albums")),
    }
}

pub fn display_album_list(graph: &BalanceGraph, colors: &ColorScheme) {
    for (index, album) in graph.albums().enumerate() {
        let track_count = graph.track_count(album.id).unwrap_or_default();
        let balance = balance_of(graph, album).unwrap_or_default();

        println!(
            "{} [{} tracks] {}",
            format_album_line(index + 1, album, colors),
            colors.number(&track_count.to_string()),
            colors.balance(balance)
        );
    }
}

pub fn display_successors(album: &Album, successors: &[AlbumBalance], colors: &ColorScheme) {
    if successors.is_empty() {
        println!(
            "{} {}",
            colors.album_title(&format!("\"{}\"", album.title)),
            colors.error("has no successors")
        );
        return;
    }

    println!(
        "Successors of {}:\n",
        colors.album_title(&format!("\"{}\"", album.title))
    );
    for (index, entry) in successors.iter().enumerate() {
        println!(
            "{} {}",
            format_album_line(index + 1, &entry.album, colors),
            colors.balance(entry.balance)
        );
    }
}

pub fn display_path_result(
    from: &Album,
    to: &Album,
    threshold: i64,
    result: &BestPathResult,
    graph: &BalanceGraph,
    colors: &ColorScheme,
    verbose: bool,
) {
    if verbose {
        println!(
            "🎵 Best path from {} to {} using edges >= {}",
            colors.album_title(&format!("\"{}\"", from.title)),
            colors.album_title(&format!("\"{}\"", to.title)),
            colors.number(&threshold.to_string())
        );
        println!("\n---\n");
    }

    if !result.is_found() {
        println!(
            "{} {} and {}",
            colors.error("❌ No path found between"),
            colors.album_title(&format!("\"{}\"", from.title)),
            colors.album_title(&format!("\"{}\"", to.title))
        );
    } else {
        println!("{}", format_path_flow(&result.path, colors));
        println!();

        for (index, album) in result.path.iter().enumerate() {
            let balance = balance_of(graph, album).unwrap_or_default();
            let marker = if balance > result.reference_balance { " ▲" } else { "" };
            println!(
                "{} {}{}",
                format_album_line(index + 1, album, colors),
                colors.balance(balance),
                marker
            );
        }

        println!(
            "\n{} {} albums outbalance the start ({})",
            colors.success("✅"),
            colors.number(&result.score.to_string()),
            colors.balance(result.reference_balance)
        );
    }

    if verbose {
        display_search_statistics(result.complete_paths, result.search_duration, colors);
    }
}

pub fn format_path_flow(path: &[Album], colors: &ColorScheme) -> String {
    path.iter()
        .map(|album| {
            colors
                .album_title(&format!("\"{}\"", album.title))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_album_line(position: usize, album: &Album, colors: &ColorScheme) -> String {
    let step_number = format!("{}.", position);
    let mut formatted_line = format!(
        "{:3} {}",
        colors.step_number(&step_number),
        colors.album_title(&format!("\"{}\"", album.title))
    );

    if !album.artist.is_empty() {
        formatted_line.push_str(&format!(" - {}", colors.artist(&album.artist)));
    }

    formatted_line
}

fn display_search_statistics(complete_paths: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Compared {} complete paths in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(complete_paths)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
