use anyhow::Result;
use clap::Parser;

use tic_tac_toe::{
    args::Args,
    headless::{parse_moves, play, render_json, render_text},
    logging::init_logging,
    state::GameState,
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging(args.log_dir.as_deref())?;

    if let Some(moves) = &args.moves {
        let moves = parse_moves(moves)?;
        let state = play(&moves, args.descending);

        if args.json {
            println!("{}", render_json(&state)?);
        } else {
            print!("{}", render_text(&state));
        }
        return Ok(());
    }

    let mut initial = GameState::new();
    if args.descending {
        initial = initial.toggle_sort_order();
    }
    run_ui(initial)
}
