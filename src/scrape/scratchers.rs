// src/scrape/scratchers.rs
// Scratcher pages: harvest game links from the index, then pull name, price
// and the remaining-prizes table from each game page.

use std::error::Error;

use crate::core::html::{collect_hrefs, inner_after_open_tag, next_tag_block_ci, slice_between_ci, strip_tags};
use crate::core::sanitize::{clean_money, normalize_entities, parse_count_pair, parse_odds};
use crate::ev::PrizeRow;

const PRICE_MARKER: &str = "Price: $";

/// Everything extracted from one scratcher game page.
pub struct ScratcherPage {
    pub game_id: String,
    pub name: String,
    pub price: f64,
    pub prizes: Vec<PrizeRow>,
}

/// Game links on the index page: anything under /scratchers/ that names a
/// specific game (ends in a digit or carries a price in the slug).
/// Sorted + deduped so a run is deterministic.
pub fn collect_game_links(index_html: &str) -> Vec<String> {
    let mut links: Vec<String> = collect_hrefs(index_html)
        .into_iter()
        .filter(|h| is_game_link(h))
        .collect();
    links.sort();
    links.dedup();
    links
}

fn is_game_link(href: &str) -> bool {
    if !href.contains("/scratchers/") {
        return false;
    }
    if href.ends_with("/scratchers") || href.ends_with("/scratchers/") {
        return false;
    }
    href.contains('$') || href.chars().last().is_some_and(|c| c.is_ascii_digit())
}

/// Trailing "-<digits>" of the game URL, e.g. ".../set-for-life-1234" → "1234".
pub fn game_id_from_url(url: &str) -> String {
    let tail: String = url
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    if tail.is_empty() || !url[..url.len() - tail.len()].ends_with('-') {
        return s!("000");
    }
    tail
}

/// Parse one game page. Fails only when no prize rows are found at all;
/// per-row parse problems degrade to zeroed fields, which the estimator
/// then treats as missing.
pub fn parse_game_page(doc: &str, url: &str) -> Result<ScratcherPage, Box<dyn Error>> {
    let name = slice_between_ci(doc, "<h1", "</h1>")
        .map(|s| strip_tags(normalize_entities(s)))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!("Unknown"));

    // Price first: "$5 TICKET" prize values need it.
    let text = strip_tags(normalize_entities(doc));
    let price = extract_price(&text);

    let mut prizes = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        let cells = read_cells(tr);
        if cells.len() < 3 {
            continue; // header row or decoration
        }

        let value = clean_money(&cells[0], price);
        let odds = parse_odds(&cells[1]);
        let (remaining, original) = parse_count_pair(&cells[2]);
        prizes.push(PrizeRow { value, odds, remaining, original });
    }

    if prizes.is_empty() {
        return Err(format!("no prize rows on {}", url).into());
    }

    Ok(ScratcherPage {
        game_id: game_id_from_url(url),
        name,
        price,
        prizes,
    })
}

fn read_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut td_pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
        let block = &tr[td_s..td_e];
        let inner = inner_after_open_tag(block);
        cells.push(strip_tags(normalize_entities(&inner)));
        td_pos = td_e;
    }
    cells
}

fn extract_price(text: &str) -> f64 {
    let Some(i) = text.find(PRICE_MARKER) else {
        return 0.0;
    };
    let rest = &text[i + PRICE_MARKER.len()..];
    let token: String = rest.chars().take_while(|c| !c.is_whitespace()).collect();
    clean_money(&token, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_PAGE: &str = r#"
        <html><head><title>Set For Life</title></head>
        <body>
        <h1>Set <span>For</span> Life</h1>
        <p>Price: $5 Top prize $1,000,000</p>
        <table class="prize-table">
          <tr><th>Prize</th><th>Odds</th><th>Remaining</th></tr>
          <tr><td>$1,000,000</td><td>1 in 1,200,000</td><td>3 of 10</td></tr>
          <tr><td>$100</td><td>1 in 500</td><td>10,000 of 24,000</td></tr>
          <tr><td>$5 TICKET</td><td>1 in 4.50</td><td>1,000,000 of 2,666,666</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn parses_name_price_and_rows() {
        let page = parse_game_page(GAME_PAGE, "https://example.com/scratchers/set-for-life-1234").unwrap();
        assert_eq!(page.name, "Set For Life");
        assert_eq!(page.game_id, "1234");
        assert_eq!(page.price, 5.0);
        assert_eq!(page.prizes.len(), 3);

        assert_eq!(page.prizes[0], PrizeRow { value: 1_000_000.0, odds: 1_200_000.0, remaining: 3.0, original: 10.0 });
        // Ticket prize counts as the ticket price
        assert_eq!(page.prizes[2].value, 5.0);
        assert_eq!(page.prizes[2].odds, 4.5);
    }

    #[test]
    fn page_without_rows_is_an_error() {
        let doc = "<html><h1>Empty</h1><p>Price: $1</p></html>";
        assert!(parse_game_page(doc, "https://example.com/scratchers/empty-1").is_err());
    }

    #[test]
    fn missing_name_falls_back_to_unknown() {
        let doc = r#"<table><tr><td>$1</td><td>1 in 9</td><td>1 of 2</td></tr></table>"#;
        let page = parse_game_page(doc, "https://example.com/scratchers/x-77").unwrap();
        assert_eq!(page.name, "Unknown");
        assert_eq!(page.price, 0.0);
    }

    #[test]
    fn game_id_extraction() {
        assert_eq!(game_id_from_url("https://x.com/scratchers/set-for-life-1234"), "1234");
        assert_eq!(game_id_from_url("https://x.com/scratchers/no-id"), "000");
        assert_eq!(game_id_from_url("https://x.com/scratchers/route66"), "000");
    }

    #[test]
    fn link_collection_filters_index_and_foreign_links() {
        let doc = r#"
            <a href="/scratchers">index</a>
            <a href="/scratchers/">index slash</a>
            <a href="/scratchers/$5-lucky-777">dollar slug</a>
            <a href="/scratchers/set-for-life-1234">game</a>
            <a href="/scratchers/set-for-life-1234">duplicate</a>
            <a href="/draw-games/powerball">other section</a>
            <a href="/scratchers/about">non-game</a>
        "#;
        let links = collect_game_links(doc);
        assert_eq!(links, vec!["/scratchers/$5-lucky-777", "/scratchers/set-for-life-1234"]);
    }
}
