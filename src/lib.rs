pub mod catalog;
pub mod commands;
pub mod config;
pub mod glyphs;
pub mod sport;
pub mod tui;
