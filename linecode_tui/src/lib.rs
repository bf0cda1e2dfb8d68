pub mod app;
pub mod backend;
pub mod cli;
pub mod component;
pub mod components;
pub mod error;
pub mod logging;
pub mod print;
pub mod tui;
pub mod utils;
pub mod widgets;

mod styles;
