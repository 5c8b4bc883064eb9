//! Library side of the `itemdeck` command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
