use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "albumgraph")]
#[command(about = "Build a track-count balance graph over an album catalog and search it")]
pub struct Args {
    /// Catalog JSON file (defaults to $ALBUMGRAPH_CATALOG, then data/catalog.json)
    #[arg(short = 'c', long, value_name = "PATH", global = true)]
    pub catalog: Option<String>,

    /// Only include albums with more than this many tracks
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "0", global = true)]
    pub min_tracks: u32,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show build info, statistics and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show graph size and the album with the highest balance
    Summary,

    /// List every album in the graph with its track count and balance
    List,

    /// Show the direct successors of an album, ordered by balance
    Successors {
        /// Album title
        album: String,
    },

    /// Find the path visiting the most albums that outbalance the start
    Path {
        /// Starting album title
        from: String,

        /// Target album title
        to: String,

        /// Only traverse edges whose weight is at least this value
        #[arg(
            short = 't',
            long,
            value_name = "WEIGHT",
            default_value = "0",
            allow_negative_numbers = true
        )]
        threshold: i64,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
    },
}
