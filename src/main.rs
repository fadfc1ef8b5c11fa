use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use vocabulary_quiz::{
    draw_quit_confirmation, draw_quiz, handle_quit_confirm_input, handle_quiz_input,
    load_vocabulary,
    load_vocabulary_or_bundled, logger, AppState, QuizConfig, QuizSession, SessionEvent,
    VocabularyStore,
};

fn main() -> io::Result<()> {
    let config = QuizConfig::from_env_and_args();
    logger::init(&config.log_path);

    let loaded = if config.bundled_fallback {
        load_vocabulary_or_bundled(&config.data_path)
    } else {
        load_vocabulary(&config.data_path)
    };
    let entries = match loaded {
        Ok(entries) => entries,
        Err(e) => {
            logger::log(&format!("Starting with an empty vocabulary: {}", e));
            Vec::new()
        }
    };

    let mut session = QuizSession::new(VocabularyStore::new(entries), StdRng::from_entropy());
    session.subscribe(|event| {
        if let SessionEvent::AnswerRecorded { status, score } = event {
            logger::log(&format!("Result {:?}, running score {}", status, score));
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    logger::log(&format!(
        "Exiting with score {} of {} answered",
        session.score(),
        session.questions_answered()
    ));
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut QuizSession<StdRng>,
) -> io::Result<()> {
    let mut app_state = AppState::Quiz;
    let mut selected: usize = 0;

    loop {
        terminal.draw(|f| {
            draw_quiz(f, session, selected);
            if app_state == AppState::QuizQuitConfirm {
                draw_quit_confirmation(f);
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app_state {
            AppState::Quiz => handle_quiz_input(session, &mut selected, key, &mut app_state),
            AppState::QuizQuitConfirm => handle_quit_confirm_input(key, &mut app_state),
            AppState::Exit => {}
        }

        if app_state == AppState::Exit {
            return Ok(());
        }
    }
}
