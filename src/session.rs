use crate::logger;
use crate::models::{
    AnswerStatus, AppState, QuizSession, QuizState, SessionEvent, VocabularyEntry,
};
use crate::random::RandomSource;
use crate::sampler::build_options;
use crate::store::VocabularyStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Options are laid out two per row.
const GRID_COLUMNS: usize = 2;

impl<R: RandomSource> QuizSession<R> {
    /// Creates the session and asks the first question if the store has any
    /// entries.
    pub fn new(store: VocabularyStore, rng: R) -> Self {
        let mut session = Self {
            store,
            rng,
            current: None,
            options: Vec::new(),
            last_answer: AnswerStatus::Unknown,
            score: 0,
            questions_answered: 0,
            listeners: Vec::new(),
        };
        session.next_question();
        session
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> QuizState {
        match (self.current, self.last_answer) {
            (None, _) => QuizState::NoQuestion,
            (Some(_), AnswerStatus::Unknown) => QuizState::AwaitingAnswer,
            (Some(_), _) => QuizState::Answered,
        }
    }

    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.current.and_then(|i| self.store.get(i))
    }

    pub fn current_options(&self) -> &[String] {
        &self.options
    }

    pub fn last_answer(&self) -> AnswerStatus {
        self.last_answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    /// Records an answer for the current question. Returns `false` without
    /// touching the score when there is no question or it was already
    /// answered.
    pub fn submit_answer(&mut self, choice: &str) -> bool {
        if self.state() != QuizState::AwaitingAnswer {
            return false;
        }
        let Some(entry) = self.current_entry() else {
            return false;
        };

        if choice == entry.translation {
            self.score += 1;
            self.last_answer = AnswerStatus::Correct;
        } else {
            self.last_answer = AnswerStatus::Incorrect;
        }
        self.questions_answered += 1;

        self.notify(SessionEvent::AnswerRecorded {
            status: self.last_answer,
            score: self.score,
        });
        true
    }

    /// Moves on to a fresh random question. Returns `false` in `NoQuestion`.
    pub fn advance(&mut self) -> bool {
        if self.state() == QuizState::NoQuestion {
            return false;
        }
        self.next_question();
        true
    }

    fn next_question(&mut self) {
        self.last_answer = AnswerStatus::Unknown;
        self.current = self.store.pick_random_index(&mut self.rng);

        match self.current.and_then(|i| self.store.get(i)) {
            Some(entry) => {
                self.options = build_options(entry, self.store.entries(), &mut self.rng);
                let term = entry.term.clone();
                logger::log(&format!(
                    "Showing '{}' with {} option(s)",
                    term,
                    self.options.len()
                ));
                self.notify(SessionEvent::QuestionShown { term });
            }
            None => {
                self.options.clear();
                logger::log("Vocabulary is empty, no question to show");
                self.notify(SessionEvent::SessionEmpty);
            }
        }
    }

    fn notify(&mut self, event: SessionEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

pub fn handle_quiz_input<R: RandomSource>(
    session: &mut QuizSession<R>,
    selected: &mut usize,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    if is_interrupt(key) {
        *app_state = AppState::Exit;
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            *app_state = AppState::QuizQuitConfirm;
            return;
        }
        KeyCode::Char('n') => {
            if session.advance() {
                *selected = 0;
            }
            return;
        }
        _ => {}
    }

    if session.state() != QuizState::AwaitingAnswer {
        if key.code == KeyCode::Enter && session.advance() {
            *selected = 0;
        }
        return;
    }

    let count = session.current_options().len();
    if count == 0 {
        return;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if index < count {
                *selected = index;
                submit_selected(session, index);
            }
        }
        KeyCode::Enter => submit_selected(session, *selected),
        KeyCode::Left | KeyCode::Char('h') => {
            if *selected % GRID_COLUMNS > 0 {
                *selected -= 1;
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if *selected % GRID_COLUMNS + 1 < GRID_COLUMNS && *selected + 1 < count {
                *selected += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if *selected >= GRID_COLUMNS {
                *selected -= GRID_COLUMNS;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + GRID_COLUMNS < count {
                *selected += GRID_COLUMNS;
            }
        }
        _ => {}
    }
}

/// Ctrl+C arrives as a key event in raw mode, not as a signal.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn handle_quit_confirm_input(key: KeyEvent, app_state: &mut AppState) {
    if is_interrupt(key) {
        *app_state = AppState::Exit;
        return;
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => *app_state = AppState::Exit,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => *app_state = AppState::Quiz,
        _ => {}
    }
}

fn submit_selected<R: RandomSource>(session: &mut QuizSession<R>, index: usize) {
    if let Some(choice) = session.current_options().get(index).cloned() {
        session.submit_answer(&choice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scenario_store() -> VocabularyStore {
        VocabularyStore::new(vec![
            VocabularyEntry::new("run", "koşmak", "He runs.", "O koşar."),
            VocabularyEntry::new("eat", "yemek", "He eats.", "O yer."),
            VocabularyEntry::new("sleep", "uyumak", "He sleeps.", "O uyur."),
            VocabularyEntry::new("read", "okumak", "He reads.", "O okur."),
        ])
    }

    fn session_with(store: VocabularyStore, seed: u64) -> QuizSession<StdRng> {
        QuizSession::new(store, StdRng::seed_from_u64(seed))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn correct<R: RandomSource>(session: &QuizSession<R>) -> String {
        session.current_entry().unwrap().translation.clone()
    }

    fn wrong(session: &QuizSession<StdRng>) -> String {
        let answer = correct(session);
        session
            .current_options()
            .iter()
            .find(|o| **o != answer)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_new_session_awaits_answer() {
        let session = session_with(scenario_store(), 1);
        assert_eq!(session.state(), QuizState::AwaitingAnswer);
        assert_eq!(session.last_answer(), AnswerStatus::Unknown);
        assert_eq!(session.score(), 0);

        let entry = session.current_entry().unwrap();
        let hits = session
            .current_options()
            .iter()
            .filter(|o| **o == entry.translation)
            .count();
        assert_eq!(hits, 1);
        assert_eq!(session.current_options().len(), 4);
    }

    #[test]
    fn test_empty_store_has_no_question() {
        let mut session = session_with(VocabularyStore::default(), 1);
        assert_eq!(session.state(), QuizState::NoQuestion);
        assert!(session.current_entry().is_none());
        assert!(session.current_options().is_empty());

        assert!(!session.submit_answer("anything"));
        assert!(!session.advance());
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), QuizState::NoQuestion);
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let mut session = session_with(scenario_store(), 2);
        let answer = correct(&session);

        assert!(session.submit_answer(&answer));
        assert_eq!(session.score(), 1);
        assert_eq!(session.last_answer(), AnswerStatus::Correct);
        assert_eq!(session.state(), QuizState::Answered);

        assert!(!session.submit_answer(&answer));
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_answered(), 1);
    }

    #[test]
    fn test_wrong_answer_keeps_score() {
        let mut session = session_with(scenario_store(), 3);
        let choice = wrong(&session);

        assert!(session.submit_answer(&choice));
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_answer(), AnswerStatus::Incorrect);

        let answer = correct(&session);
        assert!(!session.submit_answer(&answer));
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_answer(), AnswerStatus::Incorrect);
    }

    #[test]
    fn test_answer_comparison_is_exact() {
        let mut session = session_with(scenario_store(), 4);
        let answer = correct(&session).to_uppercase();
        session.submit_answer(&format!(" {answer}"));
        assert_eq!(session.last_answer(), AnswerStatus::Incorrect);
    }

    #[test]
    fn test_advance_resets_status_and_rebuilds_options() {
        let mut session = session_with(scenario_store(), 5);
        let answer = correct(&session);
        session.submit_answer(&answer);

        for _ in 0..20 {
            assert!(session.advance());
            assert_eq!(session.last_answer(), AnswerStatus::Unknown);
            assert_eq!(session.state(), QuizState::AwaitingAnswer);
            let answer = correct(&session);
            let hits = session
                .current_options()
                .iter()
                .filter(|o| **o == answer)
                .count();
            assert_eq!(hits, 1);
        }
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_advance_without_answering_is_allowed() {
        let mut session = session_with(scenario_store(), 6);
        assert!(session.advance());
        assert_eq!(session.questions_answered(), 0);
        assert_eq!(session.state(), QuizState::AwaitingAnswer);
    }

    #[test]
    fn test_scenario_two_correct_answers() {
        // Entry pick, then distractor draws; the repeated 0 is a duplicate
        // of the target and must be skipped.
        let source = ScriptedSource::new(&[0, 0, 1, 2, 3, 1, 0, 2, 3]);
        let mut session = QuizSession::new(scenario_store(), source);

        assert_eq!(session.current_entry().unwrap().term, "run");
        assert_eq!(
            session.current_options(),
            ["koşmak", "yemek", "uyumak", "okumak"]
        );
        assert!(session.submit_answer("koşmak"));
        assert_eq!(session.score(), 1);
        assert_eq!(session.last_answer(), AnswerStatus::Correct);

        assert!(session.advance());
        assert_eq!(session.current_entry().unwrap().term, "eat");
        assert_eq!(
            session.current_options(),
            ["yemek", "koşmak", "uyumak", "okumak"]
        );
        assert_eq!(session.last_answer(), AnswerStatus::Unknown);
        assert!(session.submit_answer("yemek"));
        assert_eq!(session.score(), 2);
        assert_eq!(session.rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_wrong_answer_then_correct_on_next_entry() {
        let source = ScriptedSource::new(&[2, 0, 1, 3, 3, 0, 1, 2]);
        let mut session = QuizSession::new(scenario_store(), source);

        assert_eq!(session.current_entry().unwrap().term, "sleep");
        assert!(session.submit_answer("okumak"));
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_answer(), AnswerStatus::Incorrect);

        session.advance();
        assert_eq!(session.current_entry().unwrap().term, "read");
        session.submit_answer("okumak");
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_answered(), 2);
    }

    #[test]
    fn test_two_entry_store_offers_two_options() {
        let store = VocabularyStore::new(vec![
            VocabularyEntry::new("run", "koşmak", "", ""),
            VocabularyEntry::new("eat", "yemek", "", ""),
        ]);
        let mut session = session_with(store, 9);
        for _ in 0..10 {
            let mut options = session.current_options().to_vec();
            options.sort();
            assert_eq!(options, vec!["koşmak", "yemek"]);
            session.advance();
        }
    }

    #[test]
    fn test_subscribers_receive_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = session_with(scenario_store(), 10);
        let sink = Rc::clone(&events);
        session.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let answer = correct(&session);
        session.submit_answer(&answer);
        session.submit_answer(&answer);
        session.advance();

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            SessionEvent::AnswerRecorded {
                status: AnswerStatus::Correct,
                score: 1
            }
        );
        assert!(matches!(events[1], SessionEvent::QuestionShown { .. }));
    }

    #[test]
    fn test_number_key_submits_option() {
        let mut session = session_with(scenario_store(), 11);
        let mut selected = 0;
        let mut app_state = AppState::Quiz;
        let answer = correct(&session);
        let index = session
            .current_options()
            .iter()
            .position(|o| *o == answer)
            .unwrap();
        let digit = char::from_digit(index as u32 + 1, 10).unwrap();

        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Char(digit)), &mut app_state);

        assert_eq!(selected, index);
        assert_eq!(session.score(), 1);
        assert_eq!(session.state(), QuizState::Answered);
    }

    #[test]
    fn test_grid_navigation_and_enter() {
        let mut session = session_with(scenario_store(), 12);
        let mut selected = 0;
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Right), &mut app_state);
        assert_eq!(selected, 1);
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Right), &mut app_state);
        assert_eq!(selected, 1);
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Down), &mut app_state);
        assert_eq!(selected, 3);
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Left), &mut app_state);
        assert_eq!(selected, 2);
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Up), &mut app_state);
        assert_eq!(selected, 0);

        let chosen = session.current_options()[0].clone();
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Enter), &mut app_state);
        assert_eq!(session.state(), QuizState::Answered);
        let expected = if chosen == correct(&session) { 1 } else { 0 };
        assert_eq!(session.score(), expected);

        selected = 2;
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Enter), &mut app_state);
        assert_eq!(session.state(), QuizState::AwaitingAnswer);
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_digit_out_of_range_is_ignored() {
        let store = VocabularyStore::new(vec![
            VocabularyEntry::new("run", "koşmak", "", ""),
            VocabularyEntry::new("eat", "yemek", "", ""),
        ]);
        let mut session = session_with(store, 13);
        let mut selected = 0;
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Char('3')), &mut app_state);
        assert_eq!(session.state(), QuizState::AwaitingAnswer);
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Down), &mut app_state);
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_escape_asks_for_confirmation() {
        let mut session = session_with(scenario_store(), 14);
        let mut selected = 0;
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::QuizQuitConfirm);
    }

    #[test]
    fn test_ctrl_c_exits_immediately() {
        let mut session = session_with(scenario_store(), 16);
        let mut selected = 0;
        let mut app_state = AppState::Quiz;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        handle_quiz_input(&mut session, &mut selected, ctrl_c, &mut app_state);
        assert_eq!(app_state, AppState::Exit);
        assert_eq!(session.state(), QuizState::AwaitingAnswer);
    }

    #[test]
    fn test_quit_confirmation_keys() {
        let mut app_state = AppState::QuizQuitConfirm;
        handle_quit_confirm_input(key(KeyCode::Char('x')), &mut app_state);
        assert_eq!(app_state, AppState::QuizQuitConfirm);
        handle_quit_confirm_input(key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::Quiz);

        let mut app_state = AppState::QuizQuitConfirm;
        handle_quit_confirm_input(key(KeyCode::Char('y')), &mut app_state);
        assert_eq!(app_state, AppState::Exit);

        let mut app_state = AppState::QuizQuitConfirm;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_quit_confirm_input(ctrl_c, &mut app_state);
        assert_eq!(app_state, AppState::Exit);
    }

    #[test]
    fn test_plain_c_is_not_an_interrupt() {
        assert!(!is_interrupt(key(KeyCode::Char('c'))));
        assert!(is_interrupt(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
    }

    #[test]
    fn test_next_key_skips_question() {
        let mut session = session_with(scenario_store(), 15);
        let mut selected = 3;
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut session, &mut selected, key(KeyCode::Char('n')), &mut app_state);
        assert_eq!(selected, 0);
        assert_eq!(session.state(), QuizState::AwaitingAnswer);
        assert_eq!(app_state, AppState::Quiz);
    }
}
