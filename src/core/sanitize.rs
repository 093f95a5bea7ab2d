// src/core/sanitize.rs
// Text cleanup for scraped cells. The site renders money, odds and counts as
// display strings ("$1,000", "1 in 2,400.50", "3,120 of 4,000"); everything
// here parses best-effort and falls back to zero rather than erroring, so a
// mangled cell degrades one row instead of killing the scrape.

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#36;", "$")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Parse a money-ish cell into a float.
/// "TICKET" prizes (e.g. "$5 TICKET") pay out one ticket, so they count as
/// the ticket price. Unparsable text is 0.
pub fn clean_money(raw: &str, ticket_price: f64) -> f64 {
    let up = raw.trim().to_uppercase();
    if up.contains("TICKET") {
        return ticket_price;
    }
    let filtered: String = up.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    filtered.parse().unwrap_or(0.0)
}

/// "1 in 2,400.50" → 2400.5. Unparsable → 0.
pub fn parse_odds(raw: &str) -> f64 {
    let t = raw.to_lowercase().replace("1 in", "").replace(',', "");
    t.trim().parse().unwrap_or(0.0)
}

/// "3,120 of 4,000" → (3120.0, 4000.0). Anything else → (0, 0).
pub fn parse_count_pair(raw: &str) -> (f64, f64) {
    let t = raw.to_lowercase().replace(',', "");
    let Some((left, right)) = t.split_once("of") else {
        return (0.0, 0.0);
    };
    (digits_only(left), digits_only(right))
}

fn digits_only(s: &str) -> f64 {
    let filtered: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    filtered.parse().unwrap_or(0.0)
}
