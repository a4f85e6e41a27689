//! Screen rendering: loading screen, quiz screen and confetti overlay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use qc_core::{Cue, Phase, Quote};

use crate::app::{QuizApp, TerminalSession};
use crate::shared::{draw_help_popup, option_style};

const CONFETTI_SYMBOLS: [&str; 6] = ["*", "+", "o", "~", "'", "."];
const CONFETTI_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &QuizApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match (app.phase(), app.session.as_ref()) {
        (Phase::Loading, _) | (_, None) => draw_loading(frame, chunks[1]),
        (_, Some(session)) => draw_quiz(frame, app, session, chunks[1]),
    }

    let status = Paragraph::new(status_hint(app))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.celebrating() {
        draw_confetti(frame, app.frame);
    }

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let score = app
        .session
        .as_ref()
        .map(|s| s.state().score())
        .unwrap_or(0);
    let line = Line::from(vec![
        Span::styled("Quote Clash", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("Score: {score}"), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new("Loading quotes...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    let middle = Rect {
        y: inner.y + inner.height / 2,
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(text, middle);
}

fn draw_quiz(frame: &mut Frame, app: &QuizApp, session: &TerminalSession, area: Rect) {
    let state = session.state();
    let Some(quote) = state.current_quote() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Quote card
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Options
            Constraint::Length(5), // Reveal panel
        ])
        .split(area);

    let card = Paragraph::new(format!("\"{}\"", quote.citation))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).italic())
        .block(
            Block::default()
                .title(" Quote ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(card, chunks[0]);

    let prompt = Paragraph::new("Who said this?")
        .alignment(Alignment::Center)
        .style(Style::default().bold());
    frame.render_widget(prompt, chunks[1]);

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    for (i, (option, slot)) in state.options().iter().zip(slots.iter()).enumerate() {
        let style = option_style(state.option_state(option), app.focus == i);
        let button = Paragraph::new(option.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .title(format!(" {} ", i + 1))
                    .borders(Borders::ALL)
                    .border_style(style),
            );
        frame.render_widget(button, *slot);
    }

    if let Some(revealed) = state.revealed() {
        draw_reveal(frame, revealed, chunks[3]);
    }
}

fn draw_reveal(frame: &mut Frame, quote: &Quote, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![Span::styled("Author: ", label), Span::raw(&quote.author)]),
        Line::from(vec![
            Span::styled(format!("{}: ", quote.category.source_label()), label),
            Span::raw(&quote.source),
        ]),
    ];
    if !quote.reference.is_empty() {
        lines.push(Line::from(Span::styled(&quote.reference, label)));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn status_hint(app: &QuizApp) -> String {
    match app.phase() {
        Phase::Loading => " Loading quotes...  ? help  q quit".to_string(),
        Phase::Unanswered => " 1/2 pick  h/l focus  Enter select  ? help  q quit".to_string(),
        Phase::Answered => {
            let last = app.session.as_ref().and_then(|s| s.feedback().last_cue);
            let verdict = match last {
                Some(Cue::Success) => "Correct!",
                Some(Cue::Error) => "Wrong!",
                None => "",
            };
            format!(" {verdict}  n next  ? help  q quit")
        }
    }
}

/// Scatter coloured symbols over the frame. The pattern only depends on
/// `tick`, so each frame redraws the same way.
fn draw_confetti(frame: &mut Frame, tick: u64) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut rng = StdRng::seed_from_u64(tick);
    let pieces = usize::from(area.width) * usize::from(area.height) / 12;
    let buf = frame.buffer_mut();

    for _ in 0..pieces {
        let x = area.x + rng.random_range(0..area.width);
        let y = area.y + rng.random_range(0..area.height);
        let symbol = CONFETTI_SYMBOLS[rng.random_range(0..CONFETTI_SYMBOLS.len())];
        let color = CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())];
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_fg(color);
        }
    }
}
