use crate::error::LoadError;
use crate::logger;
use crate::models::VocabularyEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const FIELD_COUNT: usize = 4;

/// The word list shipped inside the binary.
pub const BUNDLED_VOCABULARY: &str = include_str!("../data/vocabulary.csv");

pub fn load_vocabulary(path: &Path) -> Result<Vec<VocabularyEntry>, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::DataSourceMissing(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let entries = parse_vocabulary(&content);
    logger::log(&format!(
        "Loaded {} entries from {}",
        entries.len(),
        path.display()
    ));
    Ok(entries)
}

/// Reads `path`, or the bundled list when that file does not exist.
pub fn load_vocabulary_or_bundled(path: &Path) -> Result<Vec<VocabularyEntry>, LoadError> {
    match load_vocabulary(path) {
        Err(LoadError::DataSourceMissing(_)) => {
            logger::log(&format!(
                "{} not found, using the bundled vocabulary",
                path.display()
            ));
            Ok(parse_vocabulary(BUNDLED_VOCABULARY))
        }
        other => other,
    }
}

/// Parses file contents, dropping the header line and any row that does not
/// have exactly four fields.
pub fn parse_vocabulary(content: &str) -> Vec<VocabularyEntry> {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for line in content.lines().skip(1) {
        match parse_vocabulary_line(line) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        logger::log(&format!("Skipped {} malformed row(s)", skipped));
    }
    entries
}

/// Plain comma split: no quoting, so a field can never contain a comma.
pub fn parse_vocabulary_line(line: &str) -> Option<VocabularyEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    Some(VocabularyEntry::new(fields[0], fields[1], fields[2], fields[3]))
}
