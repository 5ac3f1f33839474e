use albumgraph_core::{AlbumGraphModel, CatalogProvider};
use std::error::Error;
use tracing::info;

use crate::app::AlbumGraphApp;
use crate::args::{Args, Command};
use crate::colors::ColorScheme;
use crate::display::{
    display_album_list, display_build_info, display_path_result, display_successors,
    display_summary,
};
use crate::json_output::{JsonQuery, create_json_output, print_json_output};

pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let colors = ColorScheme::new(!args.no_color);
    let app = AlbumGraphApp::new(args.catalog.clone())?;
    let mut model = app.create_model();

    let summary = model.build(args.min_tracks)?;
    info!(catalog = %app.catalog_path.display(), "Catalog loaded");

    if args.verbose {
        display_build_info(&summary, &app.catalog_path, &colors);
        println!();
    }

    execute_command(&args, &model, &colors)
}

pub fn execute_command<P: CatalogProvider>(
    args: &Args,
    model: &AlbumGraphModel<P>,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Summary => {
            let max_balance = model.max_balance_vertex();
            display_summary(model.graph(), max_balance.as_ref(), colors);
        }
        Command::List => display_album_list(model.graph(), colors),
        Command::Successors { album } => {
            let album = model.find_album(album)?;
            let successors = model.successors_with_balance(&album)?;
            display_successors(&album, &successors, colors);
        }
        Command::Path {
            from,
            to,
            threshold,
            json,
        } => {
            let from_album = model.find_album(from)?;
            let to_album = model.find_album(to)?;
            let result = model.find_best_path(&from_album, &to_album, *threshold)?;

            if *json {
                let query = JsonQuery {
                    from: from_album.title.clone(),
                    to: to_album.title.clone(),
                    threshold: *threshold,
                    min_tracks: args.min_tracks,
                };
                print_json_output(&create_json_output(&result, model.graph(), query));
            } else {
                display_path_result(
                    &from_album,
                    &to_album,
                    *threshold,
                    &result,
                    model.graph(),
                    colors,
                    args.verbose,
                );
            }
        }
    }

    Ok(())
}
