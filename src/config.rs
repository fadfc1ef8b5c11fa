use std::env;
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "VOCABULARY_QUIZ_DATA";
pub const LOG_ENV_VAR: &str = "VOCABULARY_QUIZ_LOG";
pub const DEFAULT_DATA_PATH: &str = "data/vocabulary.csv";
pub const DEFAULT_LOG_PATH: &str = "vocabulary_quiz.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    /// Set when no path was given, so a missing default file means "use the
    /// list compiled into the binary". An explicit path that is missing
    /// still starts an empty quiz.
    pub bundled_fallback: bool,
}

impl QuizConfig {
    pub fn from_env_and_args() -> Self {
        Self::resolve(
            env::args().nth(1),
            env::var(DATA_ENV_VAR).ok(),
            env::var(LOG_ENV_VAR).ok(),
        )
    }

    /// A CLI argument wins over the environment, which wins over defaults.
    pub fn resolve(arg: Option<String>, data_env: Option<String>, log_env: Option<String>) -> Self {
        let explicit = arg.or(data_env).filter(|p| !p.trim().is_empty());
        let bundled_fallback = explicit.is_none();
        let data_path = explicit
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let log_path = log_env
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        Self {
            data_path,
            log_path,
            bundled_fallback,
        }
    }
}
