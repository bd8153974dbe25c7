use tracing::warn;

use super::DictError;
use crate::successor::SuccessorRecord;

/// Separates a word from its frequency.
pub const FIELD_SEPARATOR: char = ';';
/// Separates the head record from successor records, and successors from
/// each other.
pub const RECORD_SEPARATOR: char = '&';

/// One parsed dictionary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictLine {
    pub word: String,
    pub frequency: u64,
    /// In file order. A successor listed twice on one line is merged.
    pub successors: Vec<SuccessorRecord>,
}

impl DictLine {
    pub fn encode(&self) -> String {
        encode_line(&self.word, self.frequency, &self.successors)
    }
}

/// Parse one line of the dictionary format. `line_no` is 1-based and only
/// used in errors. Blank lines parse to `None`.
///
/// Accepted shapes: `w;f`, `w;f&`, `w;f&s;g`, `w;f&s;g&` (empty records
/// between separators are ignored).
pub fn parse_line(text: &str, line_no: usize) -> Result<Option<DictLine>, DictError> {
    let text = text.strip_suffix('\r').unwrap_or(text);
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut records = text.split(RECORD_SEPARATOR);
    let head = records.next().unwrap_or_default();
    let (word, frequency) = split_record(head, line_no)?;
    if word.is_empty() {
        return Err(DictError::EmptyWord { line: line_no });
    }

    let mut successors: Vec<SuccessorRecord> = Vec::new();
    for record in records.filter(|r| !r.is_empty()) {
        let (successor, count) = split_record(record, line_no)?;
        if successor.is_empty() {
            warn!(line = line_no, word, "skipping successor record with empty word");
            continue;
        }
        match successors.iter_mut().find(|r| r.word == successor) {
            Some(existing) => existing.frequency = existing.frequency.saturating_add(count),
            None => successors.push(SuccessorRecord::new(successor, count)),
        }
    }

    Ok(Some(DictLine {
        word: word.to_string(),
        frequency,
        successors,
    }))
}

/// `word;frequency&s1;f1&s2;f2`. With no successors the line ends right
/// after the first `&`.
pub fn encode_line(word: &str, frequency: u64, successors: &[SuccessorRecord]) -> String {
    let mut out = format!("{word}{FIELD_SEPARATOR}{frequency}{RECORD_SEPARATOR}");
    for (i, record) in successors.iter().enumerate() {
        if i > 0 {
            out.push(RECORD_SEPARATOR);
        }
        out.push_str(&record.word);
        out.push(FIELD_SEPARATOR);
        out.push_str(&record.frequency.to_string());
    }
    out
}

fn split_record(record: &str, line: usize) -> Result<(&str, u64), DictError> {
    let (word, value) =
        record
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| DictError::MalformedLine {
                line,
                record: record.to_string(),
            })?;
    let frequency = value
        .trim()
        .parse::<u64>()
        .map_err(|source| DictError::InvalidFrequency {
            line,
            value: value.to_string(),
            source,
        })?;
    Ok((word, frequency))
}
