//! Parallel execution strategy

use crate::{
    analyzer::Pipeline,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    types::Chunk,
};
use rayon::prelude::*;

/// Fork-join executor: one rayon task per chunk, `collect` is the join barrier
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
}

impl ParallelExecutor {
    /// Dedicated pool of `threads` workers (at least one)
    pub fn new(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("quill-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
        log::debug!("parallel executor with {} workers", pool.current_num_threads());

        Ok(Self { pool })
    }

    /// Worker count of the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn run(&self, chunks: Vec<Chunk>, pipeline: &Pipeline) -> Result<Vec<Chunk>> {
        let processed = self.pool.install(|| -> Vec<Chunk> {
            chunks
                .into_par_iter()
                .map(|chunk| pipeline.process(chunk))
                .collect()
        });
        Ok(processed)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
