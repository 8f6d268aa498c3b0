//! Bulk import of vocabulary tables.

use super::Engine;
use crate::db::Repository;
use crate::error::{EngineError, Result};
use chrono::Utc;
use std::path::Path;
use wordbook_core::importer::parse_table;
use wordbook_core::types::Word;

/// Words stored by an import plus the rows that were skipped.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub inserted: Vec<Word>,
    pub skipped_row_count: usize,
}

impl<R: Repository> Engine<R> {
    /// Parse a pipe-delimited table and store every valid row.
    ///
    /// All words and today's new-word count are committed together, or
    /// nothing is.
    pub fn import_words(&self, text: &str) -> Result<ImportResult> {
        let table = parse_table(text)?;

        let now = Utc::now();
        let words: Vec<Word> = table
            .entries
            .into_iter()
            .map(|fields| Word::new(fields, now))
            .collect();

        let mut day = self.day_stats(self.study_day(now))?;
        let added = u32::try_from(words.len()).unwrap_or(u32::MAX);
        day.new_words_count = day.new_words_count.saturating_add(added);

        self.repo.insert_words(&words, &day)?;

        if !table.skipped_lines.is_empty() {
            tracing::debug!(lines = ?table.skipped_lines, "import rows skipped");
        }
        tracing::info!(
            inserted = words.len(),
            skipped = table.skipped_lines.len(),
            "words imported"
        );

        Ok(ImportResult {
            inserted: words,
            skipped_row_count: table.skipped_lines.len(),
        })
    }

    /// Read a UTF-8 table file and import it.
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportResult> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Access(format!("{}: {e}", path.display())))?;
        self.import_words(&content)
    }
}
