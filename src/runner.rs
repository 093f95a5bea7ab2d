// src/runner.rs
// Top-level orchestration: fetch both sections sequentially, estimate,
// sort, render, write. One blocking pass, no shared state.
//
// Failure policy: client construction is fatal; a failed section page means
// an empty section; a failed game page means one skipped row.

use std::cmp::Ordering;
use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::{
    config::Config,
    core::net,
    data::{DrawGameRow, ScratcherRow},
    ev, file,
    params::Params,
    progress::Progress,
    report,
    scrape::{draw_games, scratchers},
};

/// Summary of what one run produced.
pub struct RunSummary {
    pub report_path: PathBuf,
    pub draw_games: usize,
    pub scratchers: usize,
    pub skipped: usize,
}

pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let cfg = match &params.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let client = net::Client::new()?; // only fatal failure point

    let mut draw_rows = if params.scratchers_only {
        Vec::new()
    } else {
        collect_draw_games(&client, &cfg)
    };

    let mut scratcher_rows = Vec::new();
    let mut skipped = 0usize;
    if !params.draw_only {
        // Hand the sink over wholesale; reborrowing an Option<&mut dyn ...>
        // across a call pins the trait-object lifetime and fails to borrow-check.
        (scratcher_rows, skipped) = collect_scratchers(&client, &cfg, params, progress);
    }

    sort_by_payback(&mut draw_rows, |r| r.payback);
    sort_by_payback(&mut scratcher_rows, |r| r.payback);

    let updated = Local::now().format("%Y-%m-%d %I:%M %p").to_string();
    let html = report::render(
        &draw_rows,
        &scratcher_rows,
        params.top,
        cfg.refresh_url.as_deref(),
        &updated,
    );

    let out = file::resolve_out_path(params.out.as_deref());
    let report_path = file::write_report(&out, &html)?;
    info!(
        path = %report_path.display(),
        draw_games = draw_rows.len(),
        scratchers = scratcher_rows.len(),
        skipped,
        "report written"
    );

    Ok(RunSummary {
        report_path,
        draw_games: draw_rows.len(),
        scratchers: scratcher_rows.len(),
        skipped,
    })
}

fn collect_draw_games(client: &net::Client, cfg: &Config) -> Vec<DrawGameRow> {
    info!("scraping draw games");
    match client.get(&cfg.draw_games_url) {
        Ok(doc) => {
            let rows = draw_games::parse_draw_page(&doc, &cfg.draw_games);
            info!(games = rows.len(), "draw games parsed");
            rows
        }
        Err(e) => {
            warn!("draw-games page unavailable, section will be empty: {e}");
            Vec::new()
        }
    }
}

fn collect_scratchers(
    client: &net::Client,
    cfg: &Config,
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> (Vec<ScratcherRow>, usize) {
    info!("scraping scratchers");
    let index = match client.get(&cfg.scratchers_url) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("scratchers index unavailable, section will be empty: {e}");
            return (Vec::new(), 0);
        }
    };

    let mut links = scratchers::collect_game_links(&index);
    if let Some(limit) = params.limit {
        links.truncate(limit);
    }
    info!(games = links.len(), "game links found");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for link in &links {
        let url = absolutize(&cfg.scratchers_url, link);
        match scrape_one(client, &url) {
            Ok(Some(row)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&row.display_name());
                }
                rows.push(row);
            }
            Ok(None) => {
                // Valid page, unestimable game (sold out, or no usable proxy).
                skipped += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(link);
                }
            }
            Err(e) => {
                skipped += 1;
                warn!("skipping {url}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(link);
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    (rows, skipped)
}

/// Fetch + parse + estimate one game page.
/// `Ok(None)` means the page parsed but the game can't be priced.
fn scrape_one(client: &net::Client, url: &str) -> Result<Option<ScratcherRow>, Box<dyn Error>> {
    let doc = client.get(url)?;
    let page = scratchers::parse_game_page(&doc, url)?;

    let Some(est) = ev::estimate(page.price, &page.prizes) else {
        return Ok(None);
    };
    // parse_game_page guarantees at least one prize row
    let top = ev::top_prize(&page.prizes).ok_or("empty prize table")?;

    Ok(Some(ScratcherRow {
        name: page.name,
        game_id: page.game_id,
        price: page.price,
        ev: est.ev,
        payback: est.payback,
        base_payback: est.base_payback,
        top_prize_value: top.value,
        top_remaining: top.remaining,
        top_original: top.original,
    }))
}

/// Site-relative hrefs resolved against the index URL's origin.
fn absolutize(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    let origin = match base_url.find("://") {
        Some(i) => match base_url[i + 3..].find('/') {
            Some(j) => &base_url[..i + 3 + j],
            None => base_url,
        },
        None => base_url,
    };
    format!("{origin}{href}")
}

fn sort_by_payback<T>(rows: &mut [T], key: impl Fn(&T) -> f64) {
    rows.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
