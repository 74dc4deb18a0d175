//! Running progress of a crawl

/// Processed/total counter behind the progress frames
///
/// `total` is fixed when the crawl starts; `processed` only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    processed: usize,
    total: usize,
}

impl ProgressState {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            processed: 0,
            total,
        }
    }

    /// Count one more terminal result and return the new percentage
    pub fn record(&mut self) -> u8 {
        self.processed = (self.processed + 1).min(self.total);
        self.percent()
    }

    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `round(processed / total * 100)`, halves rounded up
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let p = self.processed as u128;
        let t = self.total as u128;
        let percent = (p * 200 + t) / (t * 2);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }
}
