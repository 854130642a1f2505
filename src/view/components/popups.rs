use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the help popup with keyboard shortcuts
pub fn render_help_popup(f: &mut Frame) {
    let area = centered_rect(40, 12, f.area());

    let help_text = vec![
        Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw("      Scroll down/up"),
        ]),
        Line::from(vec![
            Span::styled("^d/^u", Style::default().fg(Color::Yellow)),
            Span::raw("    Half page down/up"),
        ]),
        Line::from(vec![
            Span::styled("g/G", Style::default().fg(Color::Yellow)),
            Span::raw("      Go to top/bottom"),
        ]),
        Line::from(vec![
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw("        Open in browser"),
        ]),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw("        Refresh issue"),
        ]),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw("      Dismiss notice"),
        ]),
        Line::from(vec![
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::raw("        Toggle help"),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw("        Quit"),
        ]),
        Line::raw(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text).block(block);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Render the transient flash notice across the top row
pub fn render_flash(f: &mut Frame, text: &str) {
    let area = f.area();
    if area.height == 0 {
        return;
    }

    let banner_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", text),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        ),
        Span::styled(" Esc to dismiss", Style::default().fg(Color::DarkGray)),
    ]));

    f.render_widget(Clear, banner_area);
    f.render_widget(banner, banner_area);
}

/// Render the bottom legend with keyboard shortcuts
pub fn render_legend(f: &mut Frame, area: Rect) {
    let legend = Line::from(vec![
        Span::styled("j/k", Style::default().fg(Color::Yellow)),
        Span::raw(" scroll  "),
        Span::styled("g/G", Style::default().fg(Color::Yellow)),
        Span::raw(" top/bottom  "),
        Span::styled("o", Style::default().fg(Color::Yellow)),
        Span::raw(" open  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" refresh  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(" help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);

    let paragraph = Paragraph::new(legend).style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);

    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_string("menu", 10), "menu");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        assert_eq!(truncate_string("dropdown menu broken", 9), "dropdown…");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_string("débuté à müller.de", 8), "débuté …");
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 30);
        assert_eq!(rect.y, 15);
    }
}
