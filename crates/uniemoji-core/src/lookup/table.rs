use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Candidate, CharacterLookup, LookupError};

pub const DEFAULT_MAX_RESULTS: usize = 100;

#[derive(Debug, Clone)]
struct TableEntry {
    text: String,
    name: String,
    /// Lowercased `name`, matched against lowercased query words.
    key: String,
}

/// Name table loaded from TSV.
///
/// - `chars<TAB>name` per line
/// - blank lines and lines starting with `#` are skipped
///
/// A query matches an entry when every whitespace-separated query word occurs
/// in the entry name. Exact names come first, then names starting with the
/// query, then everything else, each group in table order.
#[derive(Debug, Clone)]
pub struct TableLookup {
    entries: Vec<TableEntry>,
    max_results: usize,
}

impl TableLookup {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let s = fs::read_to_string(path)?;
        Self::from_tsv_str(&s)
    }

    pub fn from_tsv_str(s: &str) -> Result<Self, LookupError> {
        let mut entries = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((text, name)) = line.split_once('\t') else {
                return Err(LookupError::Malformed {
                    line: idx + 1,
                    reason: "expected chars<TAB>name".to_string(),
                });
            };
            let name = name.trim();
            if text.is_empty() || name.is_empty() {
                return Err(LookupError::Malformed {
                    line: idx + 1,
                    reason: "empty chars or name".to_string(),
                });
            }
            entries.push(TableEntry {
                text: text.to_string(),
                name: name.to_string(),
                key: name.to_lowercase(),
            });
        }
        debug!(entries = entries.len(), "loaded lookup table");
        Ok(Self {
            entries,
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CharacterLookup for TableLookup {
    fn find_characters(&self, query: &str, _active_prefixes: &[String]) -> Vec<Candidate> {
        let query = query.trim().to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut exact = Vec::new();
        let mut leading = Vec::new();
        let mut rest = Vec::new();
        for entry in &self.entries {
            if !words.iter().all(|w| entry.key.contains(w)) {
                continue;
            }
            if entry.key == query {
                exact.push(entry);
            } else if entry.key.starts_with(&query) {
                leading.push(entry);
            } else {
                rest.push(entry);
            }
        }

        exact
            .into_iter()
            .chain(leading)
            .chain(rest)
            .take(self.max_results)
            .map(|e| Candidate::new(e.text.clone(), format!("{}: {}", e.text, e.name)))
            .collect()
    }
}
