pub mod args;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod ui;
