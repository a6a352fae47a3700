//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Alert, letter_count};
use crate::dictionary::DictionaryOracle;
use crate::output::formatters::{bonus_percent, bonus_target, length_badge};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: DictionaryOracle>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Score and bonus
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Words and messages
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_input(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_help(f, app, chunks[4]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let header = Paragraph::new(app.session.root_word().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_score<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let state = app.session.state();
    let threshold = bonus_target(state);
    let progress_pct = bonus_percent(state);

    let label = if state.bonus_active() {
        format!("Score: {} | Double points!", state.score())
    } else {
        format!(
            "Score: {} | {}/{} words to double points",
            state.score(),
            state.word_count(),
            threshold
        )
    };
    let color = if state.bonus_active() {
        Color::Blue
    } else {
        Color::Yellow
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(progress_pct)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_input<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let color = match app.input_mode {
        InputMode::Typing => Color::Yellow,
        InputMode::Alert => Color::DarkGray,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_words<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let state = app.session.state();
    let word_style = if state.bonus_active() {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    length_badge(letter_count(word)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(word.clone(), word_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", state.word_count()))
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_messages<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Bonus => Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | Ctrl-R: Start Over | Esc: Quit",
        InputMode::Alert => "Enter: OK",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
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
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
