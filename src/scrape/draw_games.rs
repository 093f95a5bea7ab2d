// src/scrape/draw_games.rs
// Draw games: the page is one long list of "Game Card" sections. We work on
// the tag-stripped text, split it at the card markers, match each card back
// to a configured game by name, and pull the advertised cash value out of
// the card body.

use crate::config::DrawGameSpec;
use crate::core::html::strip_tags;
use crate::core::sanitize::{clean_money, normalize_entities};
use crate::data::DrawGameRow;

/// Section delimiter on the draw-games page.
const CARD_MARKER: &str = "Game Card";

/// Card headings sit just before the marker.
const NAME_WINDOW: usize = 50;

/// Jackpots at or below this are stale placeholders, not real cash values.
const MIN_JACKPOT: f64 = 1_000.0;

/// Parse the whole draw-games page against the configured game table.
/// Unmatched cards and unpriceable games are silently dropped.
pub fn parse_draw_page(doc: &str, specs: &[DrawGameSpec]) -> Vec<DrawGameRow> {
    let text = strip_tags(normalize_entities(doc));
    parse_draw_text(&text, specs)
}

/// Same, but on already tag-stripped text. Split out for tests and because
/// the marker logic has nothing to do with HTML.
pub fn parse_draw_text(text: &str, specs: &[DrawGameSpec]) -> Vec<DrawGameRow> {
    let mut starts: Vec<usize> = Vec::new();
    let mut from = 0usize;
    while let Some(i) = text[from..].find(CARD_MARKER) {
        starts.push(from + i);
        from += i + CARD_MARKER.len();
    }
    starts.push(text.len());

    let mut out = Vec::new();
    for w in starts.windows(2) {
        let (at, next) = (w[0], w[1]);
        let lead = floor_char_boundary(text, at.saturating_sub(NAME_WINDOW));
        let head = text[lead..at].to_uppercase();
        let block = &text[lead..next];

        for spec in specs {
            if spec.jackpot_odds <= 0.0 || spec.price <= 0.0 {
                continue;
            }
            if !head.contains(&spec.name.to_uppercase()) {
                continue;
            }
            let jackpot = extract_jackpot(block, at - lead, spec);
            if jackpot <= MIN_JACKPOT {
                continue;
            }
            let ev = jackpot / spec.jackpot_odds + spec.price * spec.lower_tier_payback;
            out.push(DrawGameRow {
                name: spec.name.clone(),
                jackpot,
                price: spec.price,
                payback: ev / spec.price * 100.0,
            });
        }
    }
    out
}

/// `marker_at` is the byte offset of the card marker inside `block`. The
/// labelled and starred scans cover the whole block (name window included),
/// but the plain fallback only trusts text *after* the marker — an amount in
/// the previous card's tail must not become this game's jackpot.
fn extract_jackpot(block: &str, marker_at: usize, spec: &DrawGameSpec) -> f64 {
    match &spec.cash_value_label {
        Some(label) => {
            let Some(i) = block.find(label.as_str()) else {
                return 0.0;
            };
            dollar_amount_after(block, i + label.len())
                .map(|(v, _)| v)
                .unwrap_or(0.0)
        }
        None => {
            // Starred amount first ("$80,000*"), else the first plain amount
            // past the marker.
            let mut from = 0usize;
            while let Some((v, end)) = dollar_amount_after(block, from) {
                if block[end..].starts_with('*') {
                    return v;
                }
                from = end;
            }
            dollar_amount_after(block, marker_at)
                .map(|(v, _)| v)
                .unwrap_or(0.0)
        }
    }
}

/// Next "$1,234,567" from `from` onwards. Returns the value and the byte
/// offset just past the digits. Bare `$` signs are skipped.
fn dollar_amount_after(s: &str, mut from: usize) -> Option<(f64, usize)> {
    loop {
        let rel = s[from..].find('$')?;
        let start = from + rel + 1;
        let digits_len = s[start..]
            .find(|c: char| !c.is_ascii_digit() && c != ',')
            .unwrap_or(s.len() - start);
        if digits_len == 0 {
            from = start;
            continue;
        }
        let amount = clean_money(&s[start..start + digits_len], 0.0);
        return Some((amount, start + digits_len));
    }
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn specs() -> Vec<DrawGameSpec> {
        Config::default().draw_games
    }

    #[test]
    fn labelled_cash_value_is_extracted() {
        let text = "POWERBALL Game Card Jackpot $100,000,000 \
                    Estimated Cash Value $45,600,000 next draw Wednesday";
        let rows = parse_draw_text(text, &specs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Powerball");
        assert_eq!(rows[0].jackpot, 45_600_000.0);
        // ev = 45.6M / 292,201,338 + 2 × 0.18
        let ev = 45_600_000.0 / 292_201_338.0 + 0.36;
        assert!((rows[0].payback - ev / 2.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn starred_amount_wins_for_unlabelled_games() {
        let text = "FANTASY 5 Game Card Draw at 6:30pm $9,999 bonus $80,000* tonight";
        let rows = parse_draw_text(text, &specs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Fantasy 5");
        assert_eq!(rows[0].jackpot, 80_000.0);
    }

    #[test]
    fn unlabelled_game_falls_back_to_first_amount() {
        let text = "FANTASY 5 Game Card Jackpot $74,000 draws daily";
        let rows = parse_draw_text(text, &specs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].jackpot, 74_000.0);
    }

    #[test]
    fn fallback_ignores_amounts_before_the_marker() {
        // The only dollar amount sits in the name window, i.e. it belongs to
        // whatever came before this card. It must not be taken as the jackpot.
        let text = "Previous prize $99,999 near FANTASY 5 Game Card draws daily no amounts";
        assert!(parse_draw_text(text, &specs()).is_empty());
    }

    #[test]
    fn bare_dollar_signs_are_skipped() {
        let noise = "$".repeat(10_000);
        let s = format!("pay {noise} out $1,234 now");
        assert_eq!(dollar_amount_after(&s, 0), Some((1234.0, s.len() - 4)));
        assert_eq!(dollar_amount_after("no amount $", 0), None);
    }

    #[test]
    fn tiny_or_missing_jackpots_are_dropped() {
        let text = "POWERBALL Game Card Estimated Cash Value $900 refreshing \
                    MEGA MILLIONS Game Card no numbers today";
        assert!(parse_draw_text(text, &specs()).is_empty());
    }

    #[test]
    fn multiple_cards_parse_independently() {
        let text = "POWERBALL Game Card Estimated Cash Value $45,600,000 x \
                    MEGA MILLIONS Game Card Estimated Cash Value $21,000,000 y";
        let rows = parse_draw_text(text, &specs());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Powerball", "Mega Millions"]);
    }

    #[test]
    fn html_is_stripped_before_matching() {
        let doc = "<div><h3>POWERBALL</h3> <span>Game Card</span>\
                   <p>Estimated Cash Value <b>$45,600,000</b></p></div>";
        let rows = parse_draw_page(doc, &specs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].jackpot, 45_600_000.0);
    }
}
