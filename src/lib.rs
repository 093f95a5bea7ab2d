// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;

pub mod data;
pub mod ev;
pub mod file;
pub mod params;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
