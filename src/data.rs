// src/data.rs
// Row types shared between the scrape layer, the runner and the report
// renderer. Values stay numeric here; all display formatting happens in
// report.rs.

/// One draw game with a live jackpot.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawGameRow {
    pub name: String,
    pub jackpot: f64, // estimated cash value, dollars
    pub price: f64,
    pub payback: f64, // percent
}

/// One scratcher game that survived scraping and estimation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScratcherRow {
    pub name: String,
    pub game_id: String,
    pub price: f64,
    pub ev: f64,
    pub payback: f64,      // percent, current
    pub base_payback: f64, // percent, at launch
    pub top_prize_value: f64,
    pub top_remaining: f64,
    pub top_original: f64,
}

impl ScratcherRow {
    /// "Name (1234)" — the id disambiguates re-released game names.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.game_id)
    }
}
