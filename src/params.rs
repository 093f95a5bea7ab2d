// src/params.rs
use std::path::PathBuf;

pub const SCRATCHERS_URL: &str = "https://www.calottery.com/scratchers";
pub const DRAW_GAMES_URL: &str = "https://www.calottery.com/draw-games";
pub const DEFAULT_OUT_FILE: &str = "index.html";
pub const DEFAULT_TOP: usize = 10;

#[derive(Clone)]
pub struct Params {
    pub out: Option<PathBuf>,      // output path (file, or dir hint → dir/index.html)
    pub top: usize,                // scratcher rows kept in the report
    pub config: Option<PathBuf>,   // TOML override for the draw-game table
    pub scratchers_only: bool,     // skip the draw-games page
    pub draw_only: bool,           // skip scratcher game pages
    pub limit: Option<usize>,      // cap on game pages fetched (debugging aid)
}

impl Params {
    pub fn new() -> Self {
        Self {
            out: None,
            top: DEFAULT_TOP,
            config: None,
            scratchers_only: false,
            draw_only: false,
            limit: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
