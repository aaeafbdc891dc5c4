//! Handler modules for keyboard input, board play and the move list.

mod game_handler;
mod history_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use history_handler::HistoryHandler;
pub use input_handler::InputHandler;
