// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    println!(
        "Report written to {} ({} draw games, {} scratchers, {} skipped)",
        summary.report_path.display(),
        summary.draw_games,
        summary.scratchers,
        summary.skipped,
    );
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--top" => {
                let v: usize = args.next().ok_or("Missing value for --top")?.parse()?;
                if v == 0 { return Err("--top must be at least 1".into()); }
                params.top = v;
            }
            "--limit" => {
                params.limit = Some(args.next().ok_or("Missing value for --limit")?.parse()?);
            }
            "--config" => {
                params.config = Some(PathBuf::from(args.next().ok_or("Missing config path")?));
            }
            "--scratchers-only" => {
                if params.draw_only { return Err("--scratchers-only conflicts with --draw-only".into()); }
                params.scratchers_only = true;
            }
            "--draw-only" => {
                if params.scratchers_only { return Err("--scratchers-only conflicts with --draw-only".into()); }
                params.draw_only = true;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Prints one line per scratcher page so long runs show signs of life.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {} scratcher games...", total);
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {}", self.seen, self.total, label);
    }

    fn item_failed(&mut self, label: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] skipped {}", self.seen, self.total, label);
    }

    fn finish(&mut self) {
        eprintln!("Scratcher pass done.");
    }
}
