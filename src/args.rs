use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe", about = "Tic-tac-toe with a rewindable move history")]
pub struct Args {
    /// Play these cells (0-8, comma separated) without opening the UI
    #[arg(long, value_name = "CELLS")]
    pub moves: Option<String>,

    /// Print the final state as JSON (with --moves)
    #[arg(long, requires = "moves")]
    pub json: bool,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
