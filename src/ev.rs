// src/ev.rs
// Expected-value estimation for scratcher prize tables.
//
// The site publishes per-prize odds and remaining/original counts, but not the
// print run. The prize with the *lowest* odds (the most common one) is the
// most reliable scaling proxy: original × odds ≈ tickets printed, and its
// remaining/original ratio ≈ fraction of the run still unsold.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrizeRow {
    pub value: f64,     // prize amount, in dollars
    pub odds: f64,      // 1-in-N, stored as N
    pub remaining: f64, // prizes still unclaimed
    pub original: f64,  // prizes at launch
}

#[derive(Clone, Copy, Debug)]
pub struct Estimate {
    pub ev: f64,                // expected value per ticket, current
    pub payback: f64,           // ev / price, percent
    pub base_ev: f64,           // expected value ignoring depletion
    pub base_payback: f64,      // base_ev / price, percent
    pub remaining_tickets: f64, // estimated unsold tickets
}

/// Estimate the current expected value of one ticket.
///
/// Returns `None` when the game can't be estimated: non-positive price, no
/// row usable as a scaling proxy, or a fully depleted run.
pub fn estimate(price: f64, prizes: &[PrizeRow]) -> Option<Estimate> {
    if price <= 0.0 {
        return None;
    }

    let proxy = prizes
        .iter()
        .filter(|p| p.original > 0.0 && p.odds > 0.0)
        .min_by(|a, b| a.odds.partial_cmp(&b.odds).unwrap_or(Ordering::Equal))?;

    let total_tickets = proxy.original * proxy.odds;
    let remaining_tickets = total_tickets * proxy.remaining / proxy.original;
    if remaining_tickets <= 0.0 {
        return None;
    }

    let ev = prizes
        .iter()
        .map(|p| p.remaining * p.value)
        .sum::<f64>()
        / remaining_tickets;

    // Baseline: what the ticket was worth at launch, depletion ignored.
    let base_ev = prizes
        .iter()
        .filter(|p| p.odds > 0.0)
        .map(|p| p.value / p.odds)
        .sum::<f64>();

    Some(Estimate {
        ev,
        payback: ev / price * 100.0,
        base_ev,
        base_payback: base_ev / price * 100.0,
        remaining_tickets,
    })
}

/// Highest-value prize row, for the "top prize" column of the report.
pub fn top_prize(prizes: &[PrizeRow]) -> Option<&PrizeRow> {
    prizes
        .iter()
        .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal))
}
