use crate::random::RandomSource;
use crate::store::VocabularyStore;

/// One row of the vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub term: String,
    pub translation: String,
    pub example_source_sentence: String,
    pub example_translation_sentence: String,
}

impl VocabularyEntry {
    pub fn new(
        term: impl Into<String>,
        translation: impl Into<String>,
        example_source_sentence: impl Into<String>,
        example_translation_sentence: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            example_source_sentence: example_source_sentence.into(),
            example_translation_sentence: example_translation_sentence.into(),
        }
    }
}

/// Result of the last submission for the question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerStatus {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// The store is empty; nothing can be asked.
    NoQuestion,
    AwaitingAnswer,
    Answered,
}

/// Notifications delivered to session subscribers after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    QuestionShown { term: String },
    AnswerRecorded { status: AnswerStatus, score: u32 },
    SessionEmpty,
}

pub type SessionListener = Box<dyn FnMut(&SessionEvent)>;

pub struct QuizSession<R: RandomSource> {
    pub(crate) store: VocabularyStore,
    pub(crate) rng: R,
    /// Index into the store of the entry being asked.
    pub(crate) current: Option<usize>,
    pub(crate) options: Vec<String>,
    pub(crate) last_answer: AnswerStatus,
    pub(crate) score: u32,
    pub(crate) questions_answered: u32,
    pub(crate) listeners: Vec<SessionListener>,
}

impl<R: RandomSource> std::fmt::Debug for QuizSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("entries", &self.store.len())
            .field("current", &self.current)
            .field("options", &self.options)
            .field("last_answer", &self.last_answer)
            .field("score", &self.score)
            .field("questions_answered", &self.questions_answered)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    QuizQuitConfirm,
    Exit,
}
