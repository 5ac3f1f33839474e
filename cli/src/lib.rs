pub mod app;
pub mod args;
pub mod colors;
pub mod commands;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod utils;

// Re-export commonly used items
pub use args::{Args, Command};
pub use commands::run;
pub use utils::format_number;
