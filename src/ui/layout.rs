use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

pub fn body_split(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Film list
            Constraint::Percentage(70), // Details panel
        ])
        .split(area)
        .to_vec()
}

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.loading {
        Span::styled("Loading...", Style::default().fg(Color::Yellow))
    } else if let Some(refreshed) = app.last_refreshed {
        Span::styled(
            format!("fetched {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(
            "Now Showing",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        status,
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🎬 marquee "),
    );
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let (buy_label, buy_enabled) = app.buy_control();
    let buy_style = if buy_enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let delete_style = if app.delete_enabled() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(format!(" b {} ", buy_label), buy_style),
        Span::raw("│"),
        Span::styled(" d Delete Movie ", delete_style),
        Span::raw("│"),
        Span::styled(
            " j/k Move  Enter Select  r Refresh  ? Help  q Quit ",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
