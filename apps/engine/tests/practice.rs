//! Practice set selection and session grading.

mod common;

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;
use wordbook_engine::{PracticeMode, PracticeRange, WordStatus};

use common::{add_word, numbered_table, review_n, sqlite_engine};

#[test]
fn error_prone_set_contains_only_missed_words() {
    let engine = sqlite_engine();
    let words = engine.import_words(&numbered_table(10)).unwrap().inserted;

    let missed: HashSet<Uuid> = words[..3].iter().map(|w| w.id).collect();
    for word in &words[..3] {
        review_n(&engine, word, 0, 1);
    }
    for word in &words[3..] {
        review_n(&engine, word, 1, 0);
    }

    let set = engine.select_practice_set(20, PracticeRange::ErrorProne).unwrap();
    let picked: HashSet<Uuid> = set.iter().map(|w| w.id).collect();
    assert_eq!(set.len(), 3);
    assert_eq!(picked, missed);
}

#[test]
fn set_is_truncated_to_count_without_duplicates() {
    let engine = sqlite_engine();
    engine.import_words(&numbered_table(10)).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let set = engine
        .select_practice_set_with(4, PracticeRange::All, &mut rng)
        .unwrap();

    assert_eq!(set.len(), 4);
    let unique: HashSet<Uuid> = set.iter().map(|w| w.id).collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn pending_review_excludes_mastered_words() {
    let engine = sqlite_engine();
    let mastered = add_word(&engine, "cat", "猫");
    let learning = add_word(&engine, "dog", "狗");
    let fresh = add_word(&engine, "fish", "鱼");

    review_n(&engine, &mastered, 5, 0);
    review_n(&engine, &learning, 1, 1);
    assert_eq!(
        engine.get_word(mastered.id).unwrap().unwrap().status,
        WordStatus::Mastered
    );

    let picked: HashSet<Uuid> = engine
        .select_practice_set(10, PracticeRange::PendingReview)
        .unwrap()
        .iter()
        .map(|w| w.id)
        .collect();
    assert_eq!(picked, HashSet::from([learning.id, fresh.id]));

    let queue: Vec<Uuid> = engine.review_queue().unwrap().iter().map(|w| w.id).collect();
    assert_eq!(queue, vec![fresh.id, learning.id]);
}

#[test]
fn empty_store_gives_empty_set() {
    let engine = sqlite_engine();
    assert!(engine
        .select_practice_set(5, PracticeRange::All)
        .unwrap()
        .is_empty());
    assert!(engine
        .select_practice_set(0, PracticeRange::All)
        .unwrap()
        .is_empty());
}

#[test]
fn session_grades_answers_in_order() {
    let engine = sqlite_engine();
    add_word(&engine, "cat", "猫");

    let session = engine
        .start_session(PracticeMode::Single, 1, PracticeRange::All)
        .unwrap();
    assert_eq!(session.mode, PracticeMode::Single);
    assert_eq!(session.words.len(), 1);

    let checks = session.check_answers(&["CAT".to_string()]);
    assert!(checks[0].is_correct);

    let checks = session.check_answers(&[]);
    assert!(!checks[0].is_correct);
}

#[test]
fn abandoned_session_changes_nothing() {
    let engine = sqlite_engine();
    let word = add_word(&engine, "cat", "猫");

    let session = engine
        .start_session(PracticeMode::Batch, 5, PracticeRange::All)
        .unwrap();
    drop(session);

    assert_eq!(engine.get_word(word.id).unwrap().unwrap(), word);
    assert_eq!(engine.study_summary().unwrap().total_reviews, 0);
}
