use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::{parse_line, DictError, DictLine};

/// Parse a whole corpus. Fails on the first bad line; nothing is returned
/// for a partially valid input.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Vec<DictLine>, DictError> {
    let mut lines = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, text) in reader.lines().enumerate() {
        let text = text?;
        let line_no = i + 1;
        let text = if line_no == 1 {
            text.strip_prefix('\u{feff}').unwrap_or(&text)
        } else {
            &text
        };
        let Some(parsed) = parse_line(text, line_no)? else {
            continue;
        };
        if !seen.insert(parsed.word.clone()) {
            return Err(DictError::DuplicateWord {
                line: line_no,
                word: parsed.word,
            });
        }
        lines.push(parsed);
    }

    Ok(lines)
}

pub fn read_corpus_file(path: &Path) -> Result<Vec<DictLine>, DictError> {
    let file = File::open(path)?;
    read_corpus(BufReader::new(file))
}

/// Atomic write: lines go to a uniquely named temp file beside `path`,
/// which then replaces `path`. On error the temp file is removed and `path`
/// is left as it was. Returns the number of lines written.
pub fn write_corpus_file<I, S>(path: &Path, lines: I) -> Result<usize, DictError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    let mut count = 0;
    {
        let mut writer = BufWriter::new(&temp_file);
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
            count += 1;
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(count)
}
