use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::icons;

use super::components::{
    render_content, render_flash, render_header, render_help_popup, render_legend, render_loading,
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: title, status, labels
        Constraint::Length(1), // Separator
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Legend
    ])
    .split(f.area());

    // Separator line
    let separator = icons::SEPARATOR_CHAR.repeat(chunks[1].width as usize);
    f.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    if app.issue.is_some() {
        render_header(f, app, chunks[0]);
        render_content(f, app, chunks[2]);
    } else {
        render_loading(f, app, chunks[2]);
    }

    render_legend(f, chunks[3]);

    // Render overlays (order matters for layering)
    if let Some(ref flash) = app.flash {
        render_flash(f, &flash.text);
    }

    if app.show_help_popup {
        render_help_popup(f);
    }
}
