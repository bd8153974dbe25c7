//! Dictionary text format: reading, writing and the line codec.
//!
//! One line per word: `word;frequency&successor;frequency&...`. The format
//! only exists at this boundary; in memory, successor lists are structured
//! [`SuccessorRecord`](crate::successor::SuccessorRecord)s.

mod corpus_io;
mod line;

pub use corpus_io::{read_corpus, read_corpus_file, write_corpus_file};
pub use line::{encode_line, parse_line, DictLine, FIELD_SEPARATOR, RECORD_SEPARATOR};

use std::io;
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: malformed record {record:?} (expected word;frequency)")]
    MalformedLine { line: usize, record: String },

    #[error("line {line}: empty word")]
    EmptyWord { line: usize },

    #[error("line {line}: invalid frequency {value:?}: {source}")]
    InvalidFrequency {
        line: usize,
        value: String,
        source: ParseIntError,
    },

    #[error("line {line}: duplicate word {word:?}")]
    DuplicateWord { line: usize, word: String },
}
