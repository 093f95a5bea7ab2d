// src/report.rs
// Static HTML report: one self-contained page, inline CSS, two tables.
// Everything scraped goes through escape(); layout strings are ours.

use crate::data::{DrawGameRow, ScratcherRow};

/// Render the full report document.
/// `updated` is a preformatted timestamp; `top` caps the scratcher table.
pub fn render(
    draw_games: &[DrawGameRow],
    scratchers: &[ScratcherRow],
    top: usize,
    refresh_url: Option<&str>,
    updated: &str,
) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<title>Lottery EV Tracker</title>\n");
    out.push_str(r#"<meta charset="utf-8">"#);
    out.push('\n');
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    out.push('\n');
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");

    out.push_str("<h1>Lottery EV Tracker</h1>\n");
    out.push_str(&format!(
        "<p class=\"timestamp\">Last Updated: {}</p>\n",
        escape(updated)
    ));

    if let Some(url) = refresh_url {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"btn-refresh\">Force Refresh</a>\n",
            escape(url)
        ));
    }

    render_draw_table(&mut out, draw_games);
    render_scratcher_table(&mut out, scratchers, top);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_draw_table(out: &mut String, rows: &[DrawGameRow]) {
    out.push_str("<div class=\"card\">\n<h2>Best Draw Games</h2>\n<table>\n");
    out.push_str("<tr><th>Game</th><th>Jackpot (Cash)</th><th>Payback %</th></tr>\n");
    if rows.is_empty() {
        out.push_str("<tr><td colspan=\"3\">No draw-game data this run</td></tr>\n");
    }
    for r in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"hot\">{:.1}%</td></tr>\n",
            escape(&r.name),
            fmt_money(r.jackpot),
            r.payback,
        ));
    }
    out.push_str("</table>\n</div>\n");
}

fn render_scratcher_table(out: &mut String, rows: &[ScratcherRow], top: usize) {
    out.push_str(&format!(
        "<div class=\"card\">\n<h2>Top {} Hot Scratchers</h2>\n<table>\n",
        top
    ));
    out.push_str(
        "<tr><th>Game</th><th>Price</th><th>EV</th><th>Top Prize</th>\
         <th>Jackpots Left</th><th>Payback %</th><th>At Launch</th></tr>\n",
    );
    if rows.is_empty() {
        out.push_str("<tr><td colspan=\"7\">No scratcher data this run</td></tr>\n");
    }
    for r in rows.iter().take(top) {
        out.push_str(&format!(
            "<tr><td>{}</td><td>${:.0}</td><td>${:.2}</td><td>{}</td><td>{} of {}</td>\
             <td class=\"hot\">{:.1}%</td><td>{:.1}%</td></tr>\n",
            escape(&r.display_name()),
            r.price,
            r.ev,
            fmt_money(r.top_prize_value),
            r.top_remaining as i64,
            r.top_original as i64,
            r.payback,
            r.base_payback,
        ));
    }
    out.push_str("</table>\n</div>\n");
}

/// "$1,234,568" — rounded to whole dollars, thousands-separated.
pub fn fmt_money(v: f64) -> String {
    let n = v.round().abs() as u64;
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}${}", sign, with_commas(n))
}

fn with_commas(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let g = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(g.to_string());
            break;
        }
        groups.push(format!("{:03}", g));
    }
    groups.reverse();
    groups.join(",")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"<style>
body { font-family: -apple-system, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; background: #f4f4f9; }
h1 { text-align: center; color: #333; }
.btn-refresh { display: block; width: 200px; margin: 0 auto 20px auto; padding: 10px; background-color: #007bff; color: white; text-align: center; text-decoration: none; border-radius: 5px; font-weight: bold; }
.btn-refresh:hover { background-color: #0056b3; }
.card { background: white; padding: 15px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); margin-bottom: 20px; }
table { width: 100%; border-collapse: collapse; font-size: 14px; }
th, td { padding: 10px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #007bff; color: white; }
tr:nth-child(even) { background-color: #f9f9f9; }
.hot { color: green; font-weight: bold; }
.timestamp { text-align: center; color: #666; font-size: 0.8em; margin-bottom: 20px; }
</style>
"#;
