pub mod detail;
pub mod films;
pub mod help;
pub mod layout;

use ratatui::Frame;

use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let chunks = layout::main_layout(f.area());

    layout::render_header(f, app, chunks[0]);

    let body = layout::body_split(chunks[1]);
    films::render(f, app, body[0]);
    detail::render(f, app, body[1]);

    layout::render_footer(f, app, chunks[2]);

    if app.show_help {
        help::render(f);
    }
}
