//! Execution strategies for the per-chunk pipeline
//!
//! Each chunk's analyzer chain is independent, so an executor only decides
//! where the chains run. Every executor returns after all chains are done;
//! the output order is not significant because the aggregator sorts by index.

use crate::{
    analyzer::Pipeline,
    error::{EngineError, Result},
    types::Chunk,
};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Every chain on the calling thread
    Sequential,
    /// One task per chunk on a thread pool
    Parallel,
    /// Pick by chunk count
    #[default]
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Run `pipeline` over every chunk and wait for all of them
    fn run(&self, chunks: Vec<Chunk>, pipeline: &Pipeline) -> Result<Vec<Chunk>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Choose a concrete mode for `chunk_count` chunks
pub fn auto_select(chunk_count: usize, threshold: usize) -> ExecutionMode {
    if chunk_count < 2 || chunk_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Run `job` with an optional wall-clock budget
///
/// With a budget the job runs on its own thread and the caller waits on a
/// channel. When the budget expires the job's result is abandoned and
/// [`EngineError::Timeout`] is returned; the job thread is left to finish
/// in the background.
pub fn run_with_deadline<T, F>(budget: Option<Duration>, job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let Some(budget) = budget else {
        return job();
    };

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("quill-join".to_string())
        .spawn(move || {
            // The receiver is gone once the deadline has passed
            let _ = tx.send(job());
        })
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

    match rx.recv_timeout(budget) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            log::warn!("analysis exceeded its {budget:?} budget");
            Err(EngineError::Timeout { budget })
        }
        Err(RecvTimeoutError::Disconnected) => Err(EngineError::ThreadPool(
            "analysis worker exited without a result".to_string(),
        )),
    }
}
