//! Analyzers and the ordered pipeline that chains them
//!
//! Every analyzer inspects a chunk and appends matches, scoring one point
//! per match. Offsets refer to the chunk text as chunked, so an analyzer
//! that rewrites the text has to run last; [`Pipeline::new`] enforces it.

pub mod length;
pub mod lexical;
pub mod starts_with;

pub use length::LengthAnalyzer;
pub use lexical::RuleAnalyzer;
pub use starts_with::StartsWithAnalyzer;

use crate::{
    annotator::{Annotator, Markup},
    config::LengthThresholds,
    error::PipelineError,
    rules::{Lexicon, PassiveVoice, Repetition, RuleSet},
    types::{Chunk, Label},
};
use std::fmt;
use std::sync::Arc;

/// One stage of the pipeline
pub trait Analyzer: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &str;

    /// Inspect `chunk` and return it with any new matches appended
    fn process(&self, chunk: Chunk) -> Chunk;

    /// True for stages that replace the chunk text
    fn rewrites_text(&self) -> bool {
        false
    }
}

/// A validated, fixed-order chain of analyzers
pub struct Pipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Pipeline {
    /// Validate and build a pipeline
    ///
    /// At most one text-rewriting analyzer is allowed and it must be last.
    pub fn new(analyzers: Vec<Box<dyn Analyzer>>) -> Result<Self, PipelineError> {
        if analyzers.is_empty() {
            return Err(PipelineError::Empty);
        }

        let last = analyzers.len() - 1;
        if let Some((position, analyzer)) = analyzers
            .iter()
            .enumerate()
            .find(|(i, a)| a.rewrites_text() && *i != last)
        {
            return Err(PipelineError::RewriterNotLast {
                name: analyzer.name().to_string(),
                position,
            });
        }

        Ok(Self { analyzers })
    }

    /// Detection stages for every category, in report order
    pub fn detectors(rules: &RuleSet, length: LengthThresholds) -> Vec<Box<dyn Analyzer>> {
        let passive = PassiveVoice::new(
            &rules.passive.auxiliaries,
            &rules.passive.irregular_participles,
        );
        let lexicon = |label: Label, terms: &[String]| Lexicon::new(label.as_str(), terms);

        vec![
            Box::new(RuleAnalyzer::new(Label::Passive, passive, &rules.passive.message)),
            Box::new(RuleAnalyzer::new(
                Label::Weasel,
                lexicon(Label::Weasel, &rules.weasel.terms),
                &rules.weasel.message,
            )),
            Box::new(RuleAnalyzer::new(
                Label::Wordy,
                lexicon(Label::Wordy, &rules.wordy.terms),
                &rules.wordy.message,
            )),
            Box::new(RuleAnalyzer::new(
                Label::Adverb,
                lexicon(Label::Adverb, &rules.adverb.terms),
                &rules.adverb.message,
            )),
            Box::new(RuleAnalyzer::new(
                Label::Cliche,
                lexicon(Label::Cliche, &rules.cliche.terms),
                &rules.cliche.message,
            )),
            Box::new(RuleAnalyzer::new(
                Label::Illusion,
                Repetition::new(),
                &rules.illusion.message,
            )),
            Box::new(LengthAnalyzer::new(length, &rules.length)),
            Box::new(StartsWithAnalyzer::new(&rules.startswith)),
        ]
    }

    /// Every detector followed by the annotator
    pub fn standard(
        rules: &RuleSet,
        length: LengthThresholds,
        markup: Arc<dyn Markup>,
    ) -> Result<Self, PipelineError> {
        let mut analyzers = Self::detectors(rules, length);
        analyzers.push(Box::new(Annotator::new(markup)));
        Self::new(analyzers)
    }

    /// Fold `chunk` through every analyzer in declared order
    pub fn process(&self, chunk: Chunk) -> Chunk {
        self.analyzers
            .iter()
            .fold(chunk, |chunk, analyzer| analyzer.process(chunk))
    }

    /// Analyzer names in order
    pub fn names(&self) -> Vec<&str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    /// Always false for a validated pipeline
    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// True when the last stage rewrites chunk text
    pub fn annotates(&self) -> bool {
        self.analyzers.last().is_some_and(|a| a.rewrites_text())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("analyzers", &self.names())
            .finish()
    }
}

impl Analyzer for Pipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn process(&self, chunk: Chunk) -> Chunk {
        Pipeline::process(self, chunk)
    }

    fn rewrites_text(&self) -> bool {
        self.annotates()
    }
}
