//! Property-based tests for the question repository
//!
//! Uses proptest to verify properties that should hold for all documents.

use proptest::prelude::*;
use responder::adapters::MemoryStore;
use responder::core::models::{Answer, Question};
use responder::core::{NotFound, QuestionRepository, RepositoryError};

fn answer_strategy() -> impl Strategy<Value = Answer> {
    ("[a-z0-9]{1,8}", "[A-Za-z ]{1,12}", "[A-Za-z ?]{1,20}")
        .prop_map(|(id, author, summary)| Answer::new(id, author, summary))
}

/// Documents whose question IDs are unique (`q0`, `q1`, ...)
fn document_strategy() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,12}", "[A-Za-z ?]{1,20}", prop::collection::vec(answer_strategy(), 0..4)),
        0..6,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (author, summary, answers))| {
                Question::new(format!("q{i}"), author, summary).with_answers(answers)
            })
            .collect()
    })
}

fn repo_for(questions: &[Question]) -> QuestionRepository<MemoryStore> {
    QuestionRepository::new(MemoryStore::new(serde_json::to_string(questions).unwrap()))
}

proptest! {
    /// Listing returns exactly the stored questions in order
    #[test]
    fn list_returns_stored_sequence(questions in document_strategy()) {
        let repo = repo_for(&questions);
        prop_assert_eq!(repo.get_questions().unwrap(), questions);
    }

    /// Every stored question is retrievable by its ID
    #[test]
    fn get_by_id_finds_every_question(questions in document_strategy()) {
        let repo = repo_for(&questions);
        for q in &questions {
            prop_assert_eq!(&repo.get_question_by_id(&q.id).unwrap(), q);
            prop_assert_eq!(&repo.get_answers(&q.id).unwrap(), &q.answers);
        }
    }

    /// IDs outside the document are never found
    #[test]
    fn get_by_absent_id_fails(questions in document_strategy(), suffix in "[a-z]{1,6}") {
        let repo = repo_for(&questions);
        let absent = format!("absent-{suffix}");
        let err = repo.get_question_by_id(&absent).unwrap_err();
        prop_assert!(matches!(err, RepositoryError::NotFound(NotFound::Question)));
    }

    /// Adding a question leaves the prefix untouched and puts it last
    #[test]
    fn add_question_is_append_only(
        questions in document_strategy(),
        author in "[A-Za-z]{1,8}",
        summary in "[A-Za-z]{1,8}",
    ) {
        let repo = repo_for(&questions);
        let new = Question::new("new", author, summary);
        repo.add_question(new.clone()).unwrap();

        let after = repo.get_questions().unwrap();
        prop_assert_eq!(after.len(), questions.len() + 1);
        prop_assert_eq!(&after[..questions.len()], &questions[..]);
        prop_assert_eq!(after.last(), Some(&new));
    }

    /// Adding an answer only touches the target question's answer list
    #[test]
    fn add_answer_is_append_only_within_target(
        questions in document_strategy().prop_filter("non-empty", |q| !q.is_empty()),
        pick in any::<prop::sample::Index>(),
        new in answer_strategy(),
    ) {
        let target = pick.index(questions.len());
        let repo = repo_for(&questions);
        repo.add_answer(&questions[target].id, new.clone()).unwrap();

        let after = repo.get_questions().unwrap();
        prop_assert_eq!(after.len(), questions.len());
        for (i, (before, now)) in questions.iter().zip(&after).enumerate() {
            if i == target {
                let mut expected = before.answers.clone();
                expected.push(new.clone());
                prop_assert_eq!(&now.answers, &expected);
                prop_assert_eq!(&now.id, &before.id);
                prop_assert_eq!(&now.author, &before.author);
                prop_assert_eq!(&now.summary, &before.summary);
            } else {
                prop_assert_eq!(now, before);
            }
        }
    }

    /// Adding an answer to an unknown question leaves the document as it was
    #[test]
    fn add_answer_to_absent_question_writes_nothing(
        questions in document_strategy(),
        new in answer_strategy(),
    ) {
        let repo = repo_for(&questions);
        let before = repo.store().contents().unwrap();

        prop_assert!(repo.add_answer("absent", new).is_err());
        prop_assert_eq!(repo.store().contents().unwrap(), before);
    }
}
