//! Import tests against the SQLite store.

mod common;

use std::io::Write;

use pretty_assertions::assert_eq;
use wordbook_engine::{EngineError, ValidationError, WordStatus};

use common::{memory_engine, numbered_table, sqlite_engine, SAMPLE_TABLE};

#[test]
fn imports_sample_table() {
    let engine = sqlite_engine();

    let result = engine.import_words(SAMPLE_TABLE).unwrap();
    assert_eq!(result.inserted.len(), 3);
    assert_eq!(result.skipped_row_count, 0);

    let cat = engine.search_words("cat").unwrap().remove(0);
    assert_eq!(cat.english, "cat");
    assert_eq!(cat.phonetic, "kæt");
    assert_eq!(cat.chinese, "猫");
    assert_eq!(cat.status, WordStatus::Unlearned);
    assert_eq!(cat.review_count, 0);

    let dog = engine.search_words("dog").unwrap().remove(0);
    assert_eq!(dog.etymology, "古英语 docga");
    assert_eq!(dog.structure, "dog");
    assert_eq!(dog.example, "The dog barks.");
    assert_eq!(dog.example_translation, "狗在叫。");
    assert_eq!(dog.memory_tips, "多个");

    let apple = engine.search_words("apple").unwrap().remove(0);
    assert_eq!(apple.phonetic, "");
}

#[test]
fn stored_words_match_returned_words() {
    let engine = sqlite_engine();
    let result = engine.import_words(SAMPLE_TABLE).unwrap();

    for word in &result.inserted {
        assert_eq!(engine.get_word(word.id).unwrap().as_ref(), Some(word));
    }
}

#[test]
fn rows_missing_chinese_are_skipped() {
    let engine = sqlite_engine();
    let table = "| 英文 | 中文释义 |\n|---|---|\n| cat | 猫 |\n| lonely |\n| dog | 狗 |\n";

    let result = engine.import_words(table).unwrap();
    assert_eq!(result.inserted.len(), 2);
    assert_eq!(result.skipped_row_count, 1);
    assert_eq!(engine.list_words().unwrap().len(), 2);
}

#[test]
fn header_only_is_rejected() {
    let engine = sqlite_engine();

    let result = engine.import_words("| 英文 | 中文释义 |\n");
    assert!(matches!(
        result,
        Err(EngineError::Validation(ValidationError::InsufficientContent))
    ));
}

#[test]
fn table_without_valid_rows_commits_nothing() {
    let engine = sqlite_engine();
    let table = "| 英文 | 中文释义 |\n|---|---|\n| cat |\n| dog |\n";

    let result = engine.import_words(table);
    assert!(matches!(
        result,
        Err(EngineError::Validation(ValidationError::NoValidEntries))
    ));
    assert!(engine.list_words().unwrap().is_empty());
    assert_eq!(engine.calendar(1).unwrap()[0].stats.new_words_count, 0);
}

#[test]
fn import_counts_new_words_for_today() {
    let engine = sqlite_engine();

    engine.import_words(&numbered_table(4)).unwrap();
    engine.import_words(SAMPLE_TABLE).unwrap();

    let today = engine.calendar(1).unwrap().remove(0);
    assert_eq!(today.stats.new_words_count, 7);
    assert_eq!(today.stats.reviewed_count, 0);
}

#[test]
fn import_file_reads_utf8_table() {
    let engine = sqlite_engine();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_TABLE.as_bytes()).unwrap();

    let result = engine.import_file(file.path()).unwrap();
    assert_eq!(result.inserted.len(), 3);
}

#[test]
fn import_missing_file_is_access_error() {
    let engine = sqlite_engine();
    let dir = tempfile::tempdir().unwrap();

    let result = engine.import_file(dir.path().join("missing.md"));
    assert!(matches!(result, Err(EngineError::Access(_))));
    assert!(engine.list_words().unwrap().is_empty());
}

#[test]
fn failed_store_write_imports_nothing() {
    let engine = memory_engine();

    engine.repository().set_fail_writes(true);
    let result = engine.import_words(SAMPLE_TABLE);
    assert!(matches!(result, Err(EngineError::Persistence(_))));
    engine.repository().set_fail_writes(false);

    assert!(engine.list_words().unwrap().is_empty());
    assert_eq!(engine.calendar(1).unwrap()[0].stats.new_words_count, 0);
}

#[test]
fn memory_store_imports_sample_table() {
    let engine = memory_engine();

    let result = engine.import_words(SAMPLE_TABLE).unwrap();
    assert_eq!(result.inserted.len(), 3);
    assert_eq!(engine.list_words().unwrap().len(), 3);
    assert_eq!(engine.calendar(1).unwrap()[0].stats.new_words_count, 3);
}
