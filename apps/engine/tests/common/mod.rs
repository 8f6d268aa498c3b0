//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use wordbook_engine::{Engine, MemoryRepository, SqliteRepository, Word, WordFields};

/// A small vocabulary table in the import format.
pub const SAMPLE_TABLE: &str = "\
| 英文 | 中文释义 | 词根词缀 | 单词结构 | 例句 | 记忆技巧 |
|------|----------|----------|----------|------|----------|
| cat [kæt] | 猫 |
| dog [dɒɡ] | 狗 | 古英语 docga | dog | The dog barks.（狗在叫。） | 多个 |
| apple | 苹果 | |
";

/// Generate a table with `count` numbered rows.
pub fn numbered_table(count: usize) -> String {
    let mut table = String::from("| 英文 | 中文释义 |\n|---|---|\n");
    for i in 0..count {
        table.push_str(&format!("| word{i} | 词{i} |\n"));
    }
    table
}

pub fn sqlite_engine() -> Engine<SqliteRepository> {
    let repo = SqliteRepository::open_in_memory().expect("in-memory database");
    Engine::new(repo).expect("engine")
}

pub fn memory_engine() -> Engine<MemoryRepository> {
    Engine::new(MemoryRepository::new()).expect("engine")
}

/// Create a word and return its stored state.
pub fn add_word<R: wordbook_engine::Repository>(
    engine: &Engine<R>,
    english: &str,
    chinese: &str,
) -> Word {
    let id = engine
        .create_word(WordFields::new(english, chinese))
        .expect("create word");
    engine.get_word(id).expect("read word").expect("word exists")
}

/// Record `correct` successes followed by `wrong` failures.
pub fn review_n<R: wordbook_engine::Repository>(
    engine: &Engine<R>,
    word: &Word,
    correct: usize,
    wrong: usize,
) {
    for _ in 0..correct {
        engine.record_review(word.id, true, &[]).expect("record correct");
    }
    for _ in 0..wrong {
        engine.record_review(word.id, false, &[]).expect("record wrong");
    }
}
