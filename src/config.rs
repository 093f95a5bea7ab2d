// src/config.rs
// Draw-game table + report settings. Built-in defaults cover the four big
// California games; `--config file.toml` replaces the whole table.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::params::{DRAW_GAMES_URL, SCRATCHERS_URL};

/// One draw game we know how to price.
/// Jackpot odds are fixed by the game rules; the lower-tier payback fraction
/// is a published estimate of what the sub-jackpot prizes return per ticket.
#[derive(Clone, Debug, Deserialize)]
pub struct DrawGameSpec {
    pub name: String,
    pub price: f64,
    pub jackpot_odds: f64,
    #[serde(default = "default_lower_tier")]
    pub lower_tier_payback: f64,
    /// Text immediately preceding the jackpot amount on the page.
    /// `None` → take the first starred dollar amount in the game card,
    /// falling back to the first dollar amount (Fantasy 5 layout).
    #[serde(default)]
    pub cash_value_label: Option<String>,
}

fn default_lower_tier() -> f64 { 0.20 }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_scratchers_url")]
    pub scratchers_url: String,
    #[serde(default = "default_draw_games_url")]
    pub draw_games_url: String,
    /// Optional link rendered as a "force refresh" button in the report
    /// (e.g. a scheduled-workflow page).
    #[serde(default)]
    pub refresh_url: Option<String>,
    #[serde(default = "default_draw_games")]
    pub draw_games: Vec<DrawGameSpec>,
}

fn default_scratchers_url() -> String { s!(SCRATCHERS_URL) }
fn default_draw_games_url() -> String { s!(DRAW_GAMES_URL) }

fn default_draw_games() -> Vec<DrawGameSpec> {
    let cash_label = || Some(s!("Estimated Cash Value"));
    vec![
        DrawGameSpec {
            name: s!("Powerball"),
            price: 2.0,
            jackpot_odds: 292_201_338.0,
            lower_tier_payback: 0.18,
            cash_value_label: cash_label(),
        },
        DrawGameSpec {
            name: s!("Mega Millions"),
            price: 5.0,
            jackpot_odds: 290_472_336.0,
            lower_tier_payback: 0.45,
            cash_value_label: cash_label(),
        },
        DrawGameSpec {
            name: s!("SuperLotto Plus"),
            price: 1.0,
            jackpot_odds: 41_416_353.0,
            lower_tier_payback: 0.20,
            cash_value_label: cash_label(),
        },
        DrawGameSpec {
            name: s!("Fantasy 5"),
            price: 1.0,
            jackpot_odds: 575_757.0,
            lower_tier_payback: 0.40,
            cash_value_label: None,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scratchers_url: default_scratchers_url(),
            draw_games_url: default_draw_games_url(),
            refresh_url: None,
            draw_games: default_draw_games(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("read {}: {}", path.display(), e))?;
        let cfg: Config = toml::from_str(&text)
            .map_err(|e| format!("parse {}: {}", path.display(), e))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_big_four() {
        let cfg = Config::default();
        let names: Vec<&str> = cfg.draw_games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Powerball", "Mega Millions", "SuperLotto Plus", "Fantasy 5"]);
        assert!(cfg.refresh_url.is_none());
    }

    #[test]
    fn toml_override_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            refresh_url = "https://example.com/refresh"

            [[draw_games]]
            name = "Lotto Max"
            price = 3.0
            jackpot_odds = 33294800.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.scratchers_url, SCRATCHERS_URL);
        assert_eq!(cfg.draw_games.len(), 1);
        assert_eq!(cfg.draw_games[0].lower_tier_payback, 0.20);
        assert!(cfg.draw_games[0].cash_value_label.is_none());
        assert_eq!(cfg.refresh_url.as_deref(), Some("https://example.com/refresh"));
    }
}
