// src/scrape/mod.rs
pub mod draw_games;
pub mod scratchers;
