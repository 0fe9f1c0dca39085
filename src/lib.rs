pub mod args;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod omdb;
pub mod ui;
