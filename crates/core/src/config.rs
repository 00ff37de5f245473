//! Environment-backed configuration loading.

use std::env;

use crate::chunker::{ChunkConfig, ChunkStrategy};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl ChunkConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    ///
    /// Keys: `CHUNK_STRATEGY` (sentence|paragraph|fixed, unknown values fall
    /// back to sentence), `CHUNK_SIZE` (clamped to at least 1), and
    /// `CHUNK_OVERLAP`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            strategy: ChunkStrategy::parse(&env_or("CHUNK_STRATEGY", defaults.strategy.as_str())),
            chunk_size: env_usize("CHUNK_SIZE", defaults.chunk_size).max(1),
            overlap: env_usize("CHUNK_OVERLAP", defaults.overlap),
        }
    }

    /// Log the active configuration at startup.
    pub fn log_summary(&self) {
        tracing::info!(
            strategy = %self.strategy,
            chunk_size = self.chunk_size,
            overlap = self.overlap,
            "chunking config loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn from_env_reads_overrides_and_falls_back() {
        env::set_var("CHUNK_STRATEGY", "paragraph");
        env::set_var("CHUNK_SIZE", "250");
        env::set_var("CHUNK_OVERLAP", "25");
        let cfg = ChunkConfig::from_env();
        assert_eq!(cfg.strategy, ChunkStrategy::Paragraph);
        assert_eq!(cfg.chunk_size, 250);
        assert_eq!(cfg.overlap, 25);

        env::set_var("CHUNK_STRATEGY", "definitely-not-a-strategy");
        env::set_var("CHUNK_SIZE", "0");
        let cfg = ChunkConfig::from_env();
        assert_eq!(cfg.strategy, ChunkStrategy::Sentence);
        assert_eq!(cfg.chunk_size, 1, "zero size must clamp to a positive bound");

        env::remove_var("CHUNK_STRATEGY");
        env::remove_var("CHUNK_SIZE");
        env::remove_var("CHUNK_OVERLAP");
        let cfg = ChunkConfig::from_env();
        assert_eq!(cfg.strategy, ChunkStrategy::Sentence);
        assert_eq!(cfg.chunk_size, 1000);
        assert_eq!(cfg.overlap, 200);
    }
}
