pub mod args;
pub mod board;
pub mod headless;
pub mod logging;
pub mod state;
pub mod store;
pub mod ui;
pub mod verdict;
pub mod view;
