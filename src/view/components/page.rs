use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{CommentItem, IssuePage};
use crate::icons;

use super::markdown::markdown_to_lines;
use super::popups::truncate_string;

/// Render the fixed header: title line, status line, labels line
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref issue) = app.issue else {
        return;
    };

    let (state_text, state_color) = issue.state.badge();
    let noun = if issue.comment_count == 1 {
        "comment"
    } else {
        "comments"
    };

    let number = format!("#{} ", issue.number);
    let title_width = (area.width as usize).saturating_sub(number.len() + 1);
    let lines = vec![
        Line::from(vec![
            Span::styled(number, Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncate_string(&issue.title, title_width),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled(state_text, Style::default().fg(state_color).bold()),
            Span::styled("  Opened by ", Style::default().fg(Color::DarkGray)),
            Span::styled(&issue.reporter, Style::default().fg(Color::Green)),
            Span::styled(" on ", Style::default().fg(Color::DarkGray)),
            Span::raw(&issue.created_at),
            Span::styled(
                format!("  {} {} {}", icons::BULLET, issue.comment_count, noun),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::styled(&issue.labels, Style::default().fg(Color::DarkGray)),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

/// Build the scrollable page content: issue body, then the comment thread.
/// The update loop counts these same lines for scroll clamping.
pub fn content_lines(issue: &IssuePage, comments: &[CommentItem], width: u16) -> Vec<Line<'static>> {
    let mut lines = markdown_to_lines(&issue.body);

    for comment in comments {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            icons::SEPARATOR_CHAR.repeat(width.saturating_sub(2) as usize),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(vec![
            Span::styled(
                comment.commenter.clone(),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::styled(
                format!(" commented {}", comment.created_at),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::raw(""));
        lines.extend(markdown_to_lines(&comment.body));
    }

    lines
}

/// Render the scrollable content area
pub fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref issue) = app.issue else {
        return;
    };

    let mut lines = content_lines(issue, &app.comments, area.width);
    if app.loading_comments {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(app.spinner(), Style::default().fg(Color::Yellow)),
            Span::raw(" Loading comments..."),
        ]));
    }

    let content = Paragraph::new(lines)
        .scroll((app.scroll, 0))
        .wrap(Wrap { trim: false });
    f.render_widget(content, area);
}

/// Render the placeholder shown before the issue has arrived
pub fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.loading_issue {
        Line::from(vec![
            Span::styled(app.spinner(), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" Loading issue #{}...", app.target.number)),
        ])
    } else {
        Line::styled(
            "Issue not loaded. Press r to retry.",
            Style::default().fg(Color::DarkGray),
        )
    };

    f.render_widget(Paragraph::new(vec![Line::raw(""), line]), area);
}
