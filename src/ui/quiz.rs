use crate::models::{AnswerStatus, QuizSession, QuizState};
use crate::ui::layout::{calculate_option_grid, calculate_quiz_chunks};
use crate::utils::truncate_to_width;
use crate::random::RandomSource;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz<R: RandomSource>(f: &mut Frame, session: &QuizSession<R>, selected: usize) {
    let layout = calculate_quiz_chunks(f.area());

    let header_text = format!(
        "Vocabulary Quiz - Score: {} / {}",
        session.score(),
        session.questions_answered()
    );
    let header = Paragraph::new(header_text)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let Some(entry) = session.current_entry() else {
        let empty = Paragraph::new("No word selected")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, layout.entry_area);
        draw_help(f, layout.help_area, session.state());
        return;
    };

    let mut entry_text = Text::default();
    entry_text.push_line(Line::from(Span::styled(
        format!("Word: {}", entry.term),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));
    entry_text.push_line(Line::from(""));
    entry_text.push_line(Line::from(Span::styled(
        entry.example_source_sentence.as_str(),
        Style::default().fg(Color::Green),
    )));
    entry_text.push_line(Line::from(""));
    entry_text.push_line(Line::from(Span::styled(
        entry.example_translation_sentence.as_str(),
        Style::default().fg(Color::Red),
    )));

    let entry_panel = Paragraph::new(entry_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(entry_panel, layout.entry_area);

    let options_title = match session.last_answer() {
        AnswerStatus::Unknown => "Choose the translation",
        AnswerStatus::Correct => "Correct!",
        AnswerStatus::Incorrect => "Wrong answer",
    };
    f.render_widget(
        Block::default().borders(Borders::ALL).title(options_title),
        layout.options_area,
    );

    let cells = calculate_option_grid(layout.options_area);
    for (i, option) in session.current_options().iter().enumerate() {
        let Some(cell) = cells.get(i) else {
            break;
        };
        let style = option_style(
            option == &entry.translation,
            i == selected,
            session.last_answer(),
        );
        let label = truncate_to_width(
            &format!("{}. {}", i + 1, option),
            cell.width.saturating_sub(2) as usize,
        );
        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, *cell);
    }

    draw_help(f, layout.help_area, session.state());
}

/// Once answered the correct option turns green and a wrong pick turns red.
fn option_style(is_correct: bool, is_selected: bool, status: AnswerStatus) -> Style {
    match status {
        AnswerStatus::Unknown if is_selected => Style::default().add_modifier(Modifier::REVERSED),
        AnswerStatus::Unknown => Style::default(),
        _ if is_correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        AnswerStatus::Incorrect if is_selected => Style::default().fg(Color::White).bg(Color::Red),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn draw_help(f: &mut Frame, area: Rect, state: QuizState) {
    let mut spans = Vec::new();
    match state {
        QuizState::AwaitingAnswer => spans.extend([
            Span::styled("1-4", key_style()),
            Span::from(" Answer  "),
            Span::styled("←↑↓→", key_style()),
            Span::from(" Move  "),
            Span::styled("Enter", key_style()),
            Span::from(" Submit  "),
            Span::styled("n", key_style()),
            Span::from(" Next  "),
        ]),
        QuizState::Answered => spans.extend([
            Span::styled("Enter/n", key_style()),
            Span::from(" Next  "),
        ]),
        QuizState::NoQuestion => {}
    }
    spans.extend([Span::styled("Esc", key_style()), Span::from(" Quit")]);

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(40, 7, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from("Quit the quiz?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", key_style()),
            Span::from(" Yes  "),
            Span::styled("n", key_style()),
            Span::from(" No  "),
            Span::styled("Ctrl+C", key_style()),
            Span::from(" Exit"),
        ]),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}
