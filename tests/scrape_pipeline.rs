// tests/scrape_pipeline.rs
// Offline end-to-end: fixture HTML through link collection, page parsing,
// EV estimation and draw-game pricing. No network.

use lotto_scrape::config::Config;
use lotto_scrape::ev;
use lotto_scrape::scrape::{draw_games, scratchers};

const INDEX_PAGE: &str = r#"
    <html><body>
    <nav><a href="/scratchers">All Scratchers</a></nav>
    <div class="grid">
      <a href="/scratchers/lucky-7s-1501">Lucky 7s</a>
      <a href="/scratchers/lucky-7s-1501">Lucky 7s (again)</a>
      <a href='/scratchers/$10-bonus-1502'>Bonus</a>
      <a href="/draw-games/powerball">Powerball</a>
    </div>
    </body></html>
"#;

const GAME_PAGE: &str = r#"
    <html><body>
    <h1>Lucky 7s</h1>
    <div>Price: $5 &nbsp; Odds of winning shown per prize tier.</div>
    <table>
      <tr><th>Prize</th><th>Odds</th><th>Prizes Remaining</th></tr>
      <tr><td>$1,000,000</td><td>1 in 2,000,000</td><td>3 of 10</td></tr>
      <tr><td>$100</td><td>1 in 200</td><td>10,000 of 24,000</td></tr>
      <tr><td>$5 TICKET</td><td>1 in 4.50</td><td>1,000,000 of 2,000,000</td></tr>
    </table>
    </body></html>
"#;

const DRAW_PAGE: &str = r#"
    <html><body>
    <h3>POWERBALL</h3><div>Game Card</div>
    <p>Jackpot $100,000,000 &#36;cash&nbsp; Estimated Cash Value <b>$45,600,000</b></p>
    <h3>FANTASY 5</h3><div>Game Card</div>
    <p>Top prize est. $80,000* draws daily</p>
    </body></html>
"#;

#[test]
fn index_links_are_harvested_and_deduped() {
    let links = scratchers::collect_game_links(INDEX_PAGE);
    assert_eq!(links, vec!["/scratchers/$10-bonus-1502", "/scratchers/lucky-7s-1501"]);
}

#[test]
fn game_page_to_estimate() {
    let page =
        scratchers::parse_game_page(GAME_PAGE, "https://www.calottery.com/scratchers/lucky-7s-1501")
            .unwrap();
    assert_eq!(page.name, "Lucky 7s");
    assert_eq!(page.game_id, "1501");
    assert_eq!(page.price, 5.0);
    assert_eq!(page.prizes.len(), 3);

    // Proxy row: 1-in-4.5 with 2,000,000 printed → 9,000,000 tickets,
    // half of them left → 4,500,000.
    // EV = (3×1,000,000 + 10,000×100 + 1,000,000×5) / 4,500,000 = 2.0
    let est = ev::estimate(page.price, &page.prizes).unwrap();
    assert!((est.remaining_tickets - 4_500_000.0).abs() < 1e-6);
    assert!((est.ev - 2.0).abs() < 1e-9);
    assert!((est.payback - 40.0).abs() < 1e-9);

    let top = ev::top_prize(&page.prizes).unwrap();
    assert_eq!(top.value, 1_000_000.0);
    assert_eq!((top.remaining, top.original), (3.0, 10.0));
}

#[test]
fn sold_out_game_is_unestimable() {
    let doc = GAME_PAGE.replace("3 of 10", "0 of 10")
        .replace("10,000 of 24,000", "0 of 24,000")
        .replace("1,000,000 of 2,000,000", "0 of 2,000,000");
    let page = scratchers::parse_game_page(&doc, "https://x.com/scratchers/gone-9").unwrap();
    assert!(ev::estimate(page.price, &page.prizes).is_none());
}

#[test]
fn draw_page_prices_both_cards() {
    let cfg = Config::default();
    let mut rows = draw_games::parse_draw_page(DRAW_PAGE, &cfg.draw_games);
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Fantasy 5");
    assert_eq!(rows[0].jackpot, 80_000.0);
    // ev = 80,000/575,757 + 1×0.40 ≈ 0.5389 → 53.9 %
    assert!((rows[0].payback - (80_000.0 / 575_757.0 + 0.40) * 100.0).abs() < 1e-9);

    assert_eq!(rows[1].name, "Powerball");
    assert_eq!(rows[1].jackpot, 45_600_000.0);
}
