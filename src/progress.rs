// src/progress.rs
/// Lightweight progress reporting for the long scratcher pass.
/// Frontends implement this to surface status; the library never prints.
pub trait Progress {
    /// Called at the start with the number of game pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One game page scraped and estimated.
    fn item_done(&mut self, _label: &str) {}

    /// One game page skipped (fetch/parse failure or invalid estimate).
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
