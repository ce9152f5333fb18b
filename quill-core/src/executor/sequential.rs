//! Sequential execution strategy

use crate::{
    analyzer::Pipeline,
    error::Result,
    executor::{ExecutionMode, Executor},
    types::Chunk,
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(&self, chunks: Vec<Chunk>, pipeline: &Pipeline) -> Result<Vec<Chunk>> {
        Ok(chunks.into_iter().map(|chunk| pipeline.process(chunk)).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
