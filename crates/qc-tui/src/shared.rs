//! Shared layout helpers and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use qc_core::OptionState;

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Border and text style for an option button.
pub fn option_style(state: OptionState, focused: bool) -> Style {
    match state {
        OptionState::Neutral if focused => Style::default().fg(Color::Yellow).bold(),
        OptionState::Neutral => Style::default().fg(Color::White),
        OptionState::Correct => Style::default().fg(Color::Green).bold(),
        OptionState::Incorrect => Style::default().fg(Color::Red).bold(),
        OptionState::Disabled => Style::default().fg(Color::DarkGray),
    }
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Answering:"),
        Line::from("  1 / 2       Pick the first / second author"),
        Line::from("  h / l       Focus left / right (arrows work too)"),
        Line::from("  Tab         Switch focus"),
        Line::from("  Enter       Pick the focused author"),
        Line::from(""),
        Line::from("After answering:"),
        Line::from("  n / Enter   Next question"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Esc     Quit"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
