pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod generator;
pub mod logging;
pub mod page;
pub mod ui;
pub mod utils;
