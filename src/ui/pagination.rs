//! Pagination widget rendering.
//!
//! Displays a bar of page numbers with the current page highlighted.

use crate::ui::ViewFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the page number bar.
///
/// # Arguments
/// * `frame` - View snapshot
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Lists every page number, separated by spaces. The current page is drawn
/// inverted; the others are gray.
pub fn render_pagination(frame: &ViewFrame, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    for page in 1..=frame.total_pages {
        if page > 1 {
            spans.push(Span::raw(" "));
        }
        let style = if page == frame.current_page {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }

    let title = format!(
        "Page {}/{} ('←'/'→' or digits)",
        frame.current_page, frame.total_pages
    );
    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center);

    Widget::render(paragraph, area, buf);
}
