//! Configuration types for the engine

use crate::executor::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Character counts above which a sentence is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthThresholds {
    /// Longer than this is a long sentence
    pub long: usize,
    /// Longer than this is a very long sentence
    pub very_long: usize,
}

impl Default for LengthThresholds {
    fn default() -> Self {
        Self {
            long: 130,
            very_long: 160,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Chunk count at which adaptive mode switches to parallel
    ///
    /// The default of 2 fans out every multi-sentence document.
    pub adaptive_threshold: usize,
    /// Wall-clock budget for the whole join barrier
    pub timeout: Option<Duration>,
    /// Sentence length limits
    pub length: LengthThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            adaptive_threshold: 2,
            timeout: None,
            length: LengthThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Always run on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Always fan out, one task per chunk
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            adaptive_threshold: 0,
            ..Self::default()
        }
    }

    /// Size of the parallel executor's pool: `threads`, else one per CPU
    pub fn effective_threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        let available = num_cpus::get();
        #[cfg(not(feature = "parallel"))]
        let available = 1;

        self.threads.unwrap_or(available).max(1)
    }
}
