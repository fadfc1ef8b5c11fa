pub mod config;
pub mod csv;
pub mod error;
pub mod logger;
pub mod models;
pub mod random;
pub mod sampler;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::QuizConfig;
pub use csv::{load_vocabulary, load_vocabulary_or_bundled, parse_vocabulary_line};
pub use error::LoadError;
pub use random::RandomSource;
pub use models::{AnswerStatus, AppState, QuizSession, QuizState, SessionEvent, VocabularyEntry};
pub use sampler::{build_options, OPTION_COUNT};
pub use session::{handle_quit_confirm_input, handle_quiz_input};
pub use store::VocabularyStore;
pub use ui::{draw_quit_confirmation, draw_quiz};
