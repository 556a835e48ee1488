use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

// Placeholder literals shown when no film is selected.
const PLACEHOLDER_TITLE: &str = "[MOVIE TITLE]";
const PLACEHOLDER_RUNTIME: &str = "[RUNTIME] minutes";
const PLACEHOLDER_DESCRIPTION: &str = "[INSERT MOVIE DESCRIPTION HERE]";
const PLACEHOLDER_TICKETS: &str = "[X]";
const PLACEHOLDER_POSTER: &str = "assets/placeholderImage.png";

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let (title, runtime, description, remaining, showtime, poster) = match &app.current {
        Some(film) => (
            film.title.clone(),
            film.runtime_text(),
            film.description.clone(),
            film.tickets_remaining().to_string(),
            film.showtime.clone(),
            film.poster.clone(),
        ),
        None => (
            PLACEHOLDER_TITLE.to_string(),
            PLACEHOLDER_RUNTIME.to_string(),
            PLACEHOLDER_DESCRIPTION.to_string(),
            PLACEHOLDER_TICKETS.to_string(),
            String::new(),
            PLACEHOLDER_POSTER.to_string(),
        ),
    };

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

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Runtime:   ", label),
            Span::styled(runtime, value),
        ]),
        Line::from(vec![
            Span::styled("Showtime:  ", label),
            Span::styled(showtime, value),
        ]),
        Line::from(vec![
            Span::styled("Tickets:   ", label),
            Span::styled(remaining, value),
            Span::styled(" remaining", label),
        ]),
        Line::from(vec![
            Span::styled("Poster:    ", label),
            Span::styled(poster, Style::default().fg(Color::Blue)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(description, value)),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("[ {} ]", buy_label), buy_style),
            Span::raw("  "),
            Span::styled("[ Delete Movie ]", delete_style),
        ]),
    ];

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(detail, area);
}
