//! Markdown table parser for vocabulary imports.
//!
//! # Format
//! ```markdown
//! | 英文 | 中文释义 | 词根词缀 | 单词结构 | 例句 | 记忆技巧 |
//! |------|----------|----------|----------|------|----------|
//! | cat [kæt] | 猫 | | | The cat sleeps.（猫在睡觉。） | |
//! | dog [dɒɡ] | 狗 |
//! ```
//!
//! The first non-blank line is the header and the second is skipped as the
//! separator. Each following line is one entry; empty cells are dropped
//! before columns are assigned, so column positions are counted over the
//! non-empty cells only.

use crate::error::{Result, ValidationError};
use crate::types::WordFields;

/// Output of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub entries: Vec<WordFields>,
    /// 1-based line numbers of rows that lacked the required columns.
    pub skipped_lines: Vec<usize>,
}

impl ParsedTable {
    pub fn skipped_row_count(&self) -> usize {
        self.skipped_lines.len()
    }
}

/// Parse a pipe-delimited table into word fields.
///
/// Rows without both an english and a chinese column are skipped and
/// reported. The table as a whole is rejected when it has no header and
/// separator, when the header has fewer than two columns, or when no row
/// produced an entry.
pub fn parse_table(content: &str) -> Result<ParsedTable> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    if lines.len() < 2 {
        return Err(ValidationError::InsufficientContent);
    }

    let header = split_columns(lines[0].1);
    if header.len() < 2 {
        return Err(ValidationError::BadHeader {
            columns: header.len(),
        });
    }

    let mut entries = Vec::new();
    let mut skipped_lines = Vec::new();

    for &(line_num, line) in &lines[2..] {
        match parse_row(&split_columns(line)) {
            Some(fields) => entries.push(fields),
            None => skipped_lines.push(line_num),
        }
    }

    if entries.is_empty() {
        return Err(ValidationError::NoValidEntries);
    }

    Ok(ParsedTable {
        entries,
        skipped_lines,
    })
}

fn split_columns(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn parse_row(columns: &[&str]) -> Option<WordFields> {
    if columns.len() < 2 {
        return None;
    }

    let (english, phonetic) = split_headword(columns[0]);
    if english.is_empty() {
        return None;
    }

    let mut fields = WordFields {
        english: english.to_string(),
        chinese: columns[1].to_string(),
        phonetic: phonetic.to_string(),
        ..Default::default()
    };

    if let Some(etymology) = columns.get(2) {
        fields.etymology = etymology.to_string();
    }
    if let Some(structure) = columns.get(3) {
        fields.structure = structure.to_string();
    }
    if let Some(example) = columns.get(4) {
        let (sentence, translation) = split_example(example);
        fields.example = sentence.to_string();
        fields.example_translation = translation;
    }
    if let Some(tips) = columns.get(5) {
        fields.memory_tips = tips.to_string();
    }

    Some(fields)
}

/// Split `"<english> [<phonetic>]"`.
///
/// Only the segment between the first and second `[` is considered, and the
/// phonetic is only taken when `]` closes it.
fn split_headword(cell: &str) -> (&str, &str) {
    let mut parts = cell.split('[');
    let english = parts.next().unwrap_or("").trim();
    let phonetic = parts
        .next()
        .and_then(|segment| segment.split_once(']'))
        .map(|(p, _)| p)
        .unwrap_or("");
    (english, phonetic)
}

/// Split `"<sentence>（<translation>）"` on the full-width parentheses.
///
/// The translation is the segment between the first and second `（`.
fn split_example(cell: &str) -> (&str, String) {
    let mut parts = cell.split('（');
    let sentence = parts.next().unwrap_or("").trim();
    let translation = parts
        .next()
        .map(|segment| segment.replace('）', ""))
        .unwrap_or_default();
    (sentence, translation)
}
