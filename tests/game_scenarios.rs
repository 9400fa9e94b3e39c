//! End-to-end games through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::{LetterStatus, Mark, Word, evaluate};
use wordle_game::dictionary::Dictionary;
use wordle_game::game::{GameError, GameSession, GameStatus, MAX_ATTEMPTS};

fn midst_session(dict: &Dictionary) -> GameSession<'_, Dictionary> {
    let mut rng = StdRng::seed_from_u64(0);
    GameSession::create(Some("midst"), dict, &mut rng).unwrap()
}

#[test]
fn midst_won_in_five() {
    let dict = Dictionary::embedded();
    let mut session = midst_session(&dict);

    for guess in ["daily", "sword", "unite", "tidal"] {
        let outcome = session.submit_guess(guess).unwrap();
        assert_eq!(outcome.status, GameStatus::InProgress);
    }
    let outcome = session.submit_guess("midst").unwrap();

    assert!(outcome.feedback.is_win());
    assert_eq!(outcome.status, GameStatus::Won);
    assert_eq!(session.attempts(), 5);
    assert_eq!(
        session.submit_guess("plane"),
        Err(GameError::SessionTerminal(GameStatus::Won))
    );
    assert_eq!(session.attempts(), 5);
}

#[test]
fn midst_lost_after_six() {
    let dict = Dictionary::embedded();
    let mut session = midst_session(&dict);

    for guess in ["daily", "sword", "unite", "tidal", "plane"] {
        session.submit_guess(guess).unwrap();
    }
    let outcome = session.submit_guess("chair").unwrap();

    assert_eq!(outcome.status, GameStatus::Lost);
    assert_eq!(outcome.feedback.to_string(), "---Y-");
    assert_eq!(session.attempts(), MAX_ATTEMPTS);
    assert_eq!(session.remaining_attempts(), 0);

    let knowledge = session.knowledge();
    assert_eq!(knowledge.status(b'd'), LetterStatus::Correct);
    assert_eq!(knowledge.status(b's'), LetterStatus::Present);
    assert_eq!(knowledge.status(b't'), LetterStatus::Present);
    assert_eq!(knowledge.status(b'i'), LetterStatus::Correct);
    assert_eq!(knowledge.status(b'z'), LetterStatus::Unknown);
    assert_eq!(knowledge.status(b'w'), LetterStatus::Absent);

    session.reset(Word::new("tidal").unwrap());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.history().is_empty());
}

#[test]
fn rejected_guesses_cost_nothing() {
    let dict = Dictionary::embedded();
    let mut session = midst_session(&dict);

    assert_eq!(
        session.submit_guess("cat"),
        Err(GameError::InvalidLength {
            expected: 5,
            actual: 3
        })
    );
    assert_eq!(
        session.submit_guess("zzzzz"),
        Err(GameError::UnknownWord("zzzzz".to_string()))
    );
    assert_eq!(session.attempts(), 0);
    assert!(session.knowledge().iter().all(|(_, s)| s == LetterStatus::Unknown));
}

#[test]
fn repeated_letters_credited_once() {
    let secret = Word::new("chair").unwrap();
    let guess = Word::new("error").unwrap();
    let feedback = evaluate(&secret, &guess);

    assert_eq!(feedback.mark_at(4), Mark::Correct);
    assert_eq!(feedback.mark_at(1), Mark::Absent);
    assert_eq!(feedback.mark_at(2), Mark::Absent);
    assert_eq!(feedback.count(Mark::Present), 0);
}

#[test]
fn random_secret_from_custom_dictionary() {
    let dict = Dictionary::from_words(["cat", "tidal", "bilibili"]);
    let mut rng = StdRng::seed_from_u64(99);
    let mut session = GameSession::create(None, &dict, &mut rng).unwrap();

    assert_eq!(session.secret().text(), "tidal");
    assert!(session.submit_guess("TIDAL").unwrap().feedback.is_win());
}
