use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Convert markdown text to styled ratatui lines (images shown as raw markdown)
pub fn markdown_to_lines(markdown: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();
    let mut current_text = String::new();

    // Style state
    let mut bold = false;
    let mut italic = false;
    let mut strike = false;
    let mut link = false;
    let mut heading_color: Option<Color> = None;
    let mut in_code_block = false;
    let mut in_image = false;
    let mut image_alt = String::new();
    let mut image_url = String::new();

    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                    // Blank line before headings for spacing
                    if !lines.is_empty() {
                        lines.push(Line::raw(""));
                    }
                    // Heading style - color based on level, no # prefix
                    bold = true;
                    heading_color = Some(match level {
                        pulldown_cmark::HeadingLevel::H1 => Color::Cyan,
                        pulldown_cmark::HeadingLevel::H2 => Color::Green,
                        pulldown_cmark::HeadingLevel::H3 => Color::Yellow,
                        _ => Color::Magenta,
                    });
                }
                Tag::Paragraph => {
                    if !current_spans.is_empty() || !current_text.is_empty() {
                        flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                        if !current_spans.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                        lines.push(Line::raw(""));
                    }
                }
                Tag::CodeBlock(_) => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                    in_code_block = true;
                }
                Tag::List(_) => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                }
                Tag::Item => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    current_spans.push(Span::styled("• ", Style::default().fg(Color::Yellow)));
                }
                Tag::Strong => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    bold = true;
                }
                Tag::Emphasis => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    italic = true;
                }
                Tag::Strikethrough => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    strike = true;
                }
                Tag::Link { .. } => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    link = true;
                }
                Tag::Image { dest_url, .. } => {
                    // Capture image info to show as raw markdown
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    in_image = true;
                    image_url = dest_url.to_string();
                    image_alt.clear();
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Heading(_) => {
                    flush_heading_text(&mut current_text, &mut current_spans, heading_color);
                    bold = false;
                    heading_color = None;
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                    lines.push(Line::raw(""));
                }
                TagEnd::Paragraph => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    lines.push(Line::raw(""));
                }
                TagEnd::List(_) => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                }
                TagEnd::Item => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                }
                TagEnd::Strong => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    bold = false;
                }
                TagEnd::Emphasis => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    italic = false;
                }
                TagEnd::Strikethrough => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    strike = false;
                }
                TagEnd::Link => {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    link = false;
                }
                TagEnd::Image => {
                    // Output the image as raw markdown text
                    let raw_md = format!("![{}]({})", image_alt, image_url);
                    current_spans.push(Span::styled(raw_md, Style::default().fg(Color::DarkGray)));
                    in_image = false;
                    image_alt.clear();
                    image_url.clear();
                }
                _ => {}
            },
            Event::Text(text) => {
                if in_image {
                    // Capture alt text for image
                    image_alt.push_str(&text);
                    continue;
                }
                if in_code_block {
                    for line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", line),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                } else {
                    current_text.push_str(&text);
                }
            }
            Event::Code(code_text) => {
                if in_image {
                    continue;
                }
                flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                current_spans.push(Span::styled(
                    format!("`{}`", code_text),
                    Style::default().fg(Color::Gray),
                ));
            }
            Event::SoftBreak | Event::HardBreak => {
                if !in_code_block && !in_image {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    if !current_spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                }
            }
            Event::Html(html) => {
                // Show embedded media as raw HTML (screenshots land in reports this way)
                let html_lower = html.to_lowercase();
                if html_lower.contains("<video")
                    || html_lower.contains("<img")
                    || html_lower.contains("<iframe")
                {
                    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
                    current_spans.push(Span::styled(
                        html.trim().to_string(),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            _ => {}
        }
    }

    // Flush any remaining content
    flush_text(&mut current_text, &mut current_spans, bold, italic, strike, link);
    if !current_spans.is_empty() {
        lines.push(Line::from(current_spans));
    }

    lines
}

/// Flush accumulated text to spans with appropriate styling
fn flush_text(
    text: &mut String,
    spans: &mut Vec<Span<'static>>,
    bold: bool,
    italic: bool,
    strike: bool,
    link: bool,
) {
    if text.is_empty() {
        return;
    }

    let mut style = Style::default();
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if strike {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if link {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    spans.push(Span::styled(std::mem::take(text), style));
}

/// Flush accumulated text for headings with color
fn flush_heading_text(text: &mut String, spans: &mut Vec<Span<'static>>, color: Option<Color>) {
    if text.is_empty() {
        return;
    }

    let style = if let Some(c) = color {
        Style::default().fg(c).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    spans.push(Span::styled(std::mem::take(text), style));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_renders_colored_and_bold() {
        let lines = markdown_to_lines("# Steps to reproduce");
        assert_eq!(lines[0].spans[0].content.as_ref(), "Steps to reproduce");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Cyan));
        assert!(lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn soft_breaks_become_separate_lines() {
        let lines = markdown_to_lines("first line\nsecond line");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content.as_ref(), "first line");
        assert_eq!(lines[1].spans[0].content.as_ref(), "second line");
    }

    #[test]
    fn code_blocks_are_indented() {
        let lines = markdown_to_lines("```\nnavigator.userAgent\n```");
        assert_eq!(lines[0].spans[0].content.as_ref(), "  navigator.userAgent");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Gray));
    }

    #[test]
    fn images_render_as_raw_markdown() {
        let lines = markdown_to_lines("![screenshot](https://example.com/shot.png)");
        let flat: String = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.as_ref())
            .collect();
        assert!(flat.contains("![screenshot](https://example.com/shot.png)"));
    }

    #[test]
    fn link_text_is_underlined() {
        let lines = markdown_to_lines("see [the report](https://webcompat.com/issues/100)");
        let span = lines[0]
            .spans
            .iter()
            .find(|span| span.content.as_ref() == "the report")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn strikethrough_is_crossed_out() {
        let lines = markdown_to_lines("~~not reproducible~~");
        let span = lines[0]
            .spans
            .iter()
            .find(|span| span.content.as_ref() == "not reproducible")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(markdown_to_lines("").is_empty());
    }
}
