//! Configuration for a play session.

/// Narrow terminals still get readable lines.
const MIN_WIDTH: usize = 20;

/// Configuration for a play session.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// World seed; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Column at which narration wraps.
    pub width: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            width: 80,
        }
    }
}

impl PlayConfig {
    /// Set the world seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the wrap width (raised to a sane minimum).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }
}
