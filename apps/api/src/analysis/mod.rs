// Skill-matching and heuristic-scoring engine.
// Pure functions only: no I/O, no shared state. Responders compose these.

pub mod classifiers;
pub mod composite;
pub mod dictionaries;
pub mod extractor;
pub mod fallbacks;
pub mod jitter;
pub mod overlap;
pub mod schema;

use crate::analysis::extractor::MatchMode;
use crate::analysis::jitter::Jitter;

/// Per-process engine settings handed to every responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub match_mode: MatchMode,
    pub jitter: Jitter,
}

impl EngineOptions {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            match_mode: config.match_mode,
            jitter: Jitter::new(config.jitter_mode),
        }
    }
}
