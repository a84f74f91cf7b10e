// src/progress.rs
/// Lightweight progress reporting used by the scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of areas.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One area page was fetched and parsed.
    fn item_done(&mut self, _area: &str) {}

    /// One area page could not be fetched; the area is skipped.
    fn item_failed(&mut self, _area: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Progress sink that only writes to the log.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, area: &str) {
        self.done += 1;
        logf!("[{}/{}] {area}", self.done, self.total);
    }

    fn item_failed(&mut self, area: &str, err: &str) {
        self.done += 1;
        logw!("[{}/{}] {area} skipped: {err}", self.done, self.total);
    }
}
