use albumgraph::{Args, colors::ColorScheme, logging::init_tracing, run};
use clap::Parser;

fn main() {
    let args = Args::parse();

    // A missing .env file is fine
    dotenvy::dotenv().ok();
    init_tracing(args.verbose);

    let colors = ColorScheme::new(!args.no_color);
    if let Err(error) = run(args) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}
