//! Sentence chunking
//!
//! A single pass over the input, one line at a time and one character at a
//! time within a line. Each line opens a new paragraph; within a line a
//! chunk ends after a run of sentence terminators or at the end of the line.
//! Corpus statistics are collected during the same pass.

use crate::{
    classifier::CharClass,
    types::{Chunk, Summary},
};

/// Splits text into sentence-level chunks
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceChunker;

impl SentenceChunker {
    /// Create a new chunker
    pub fn new() -> Self {
        Self
    }

    /// Chunk `text`, returning chunks ordered by index and the statistics summary
    ///
    /// Never fails; empty input yields no chunks and a zero summary.
    pub fn chunk(&self, text: &str) -> (Vec<Chunk>, Summary) {
        let mut scan = Scan::default();
        for line in text.lines() {
            scan.line(line);
        }

        log::debug!(
            "chunked {} characters into {} sentences across {} paragraphs",
            scan.summary.characters,
            scan.chunks.len(),
            scan.summary.paragraphs
        );

        (scan.chunks, scan.summary)
    }
}

/// Convenience wrapper around [`SentenceChunker::chunk`]
pub fn chunk_text(text: &str) -> (Vec<Chunk>, Summary) {
    SentenceChunker::new().chunk(text)
}

#[derive(Default)]
struct Scan {
    chunks: Vec<Chunk>,
    summary: Summary,
}

impl Scan {
    fn line(&mut self, line: &str) {
        let mut current: Option<ChunkBuilder> = None;
        let mut new_paragraph = true;
        let mut prev: Option<CharClass> = None;

        for ch in line.chars() {
            let class = CharClass::of(ch);

            // Adjacent terminators stay with the sentence they end
            if current.as_ref().is_some_and(|b| b.terminated) && class != CharClass::Terminator {
                if let Some(done) = current.take() {
                    self.emit(done);
                }
            }

            if current.is_none() {
                self.summary.sentences += 1;
                if new_paragraph {
                    self.summary.paragraphs += 1;
                    // The sentence's first word has no leading boundary
                    self.summary.words += 1;
                }
                current = Some(ChunkBuilder::new(self.chunks.len(), new_paragraph));
                new_paragraph = false;
            }

            let Some(builder) = current.as_mut() else {
                continue;
            };
            builder.push(ch, class);

            self.summary.characters += 1;
            if class == CharClass::Alpha {
                self.summary.letters += 1;
            }
            if class == CharClass::Space && prev.is_some_and(|p| p != CharClass::Space) {
                self.summary.words += 1;
            }

            prev = Some(class);
        }

        if let Some(last) = current.take() {
            if !last.terminated {
                self.summary.words += 1;
            }
            self.emit(last);
        }
    }

    fn emit(&mut self, builder: ChunkBuilder) {
        debug_assert_eq!(builder.chunk.index, self.chunks.len());
        self.chunks.push(builder.finish());
    }
}

struct ChunkBuilder {
    chunk: Chunk,
    word: String,
    word_done: bool,
    terminated: bool,
}

impl ChunkBuilder {
    fn new(index: usize, is_new_paragraph: bool) -> Self {
        let mut chunk = Chunk::new(index);
        chunk.is_new_paragraph = is_new_paragraph;
        Self {
            chunk,
            word: String::new(),
            word_done: false,
            terminated: false,
        }
    }

    fn push(&mut self, ch: char, class: CharClass) {
        self.chunk.text.push(ch);

        if !self.word_done {
            if class.is_word() {
                self.word.push(ch);
            } else if !self.word.is_empty() {
                self.word_done = true;
            }
        }

        if class == CharClass::Terminator {
            self.terminated = true;
        }
    }

    fn finish(mut self) -> Chunk {
        self.chunk.first_word = self.word;
        self.chunk
    }
}
