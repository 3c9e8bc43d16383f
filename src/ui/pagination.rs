//! Page indicator rendering.
//!
//! Turns a [`PageIndicator`] into a single line of spans. An open jump prompt
//! is drawn in place of the ellipsis it replaced.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::search::{JumpSide, PageIndicator, PageItem};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG};

fn item_label(item: PageItem) -> String {
    match item {
        PageItem::First => "«".to_string(),
        PageItem::Previous => "‹".to_string(),
        PageItem::Page(n) => n.to_string(),
        PageItem::StartEllipsis | PageItem::EndEllipsis => "…".to_string(),
        PageItem::Next => "›".to_string(),
        PageItem::Last => "»".to_string(),
    }
}

fn jump_side(item: PageItem) -> Option<JumpSide> {
    match item {
        PageItem::StartEllipsis => Some(JumpSide::Start),
        PageItem::EndEllipsis => Some(JumpSide::End),
        _ => None,
    }
}

/// Spans for the page indicator, or an empty line when there are no pages.
pub fn page_indicator_line(indicator: &PageIndicator) -> Line<'static> {
    let page = indicator.page();
    let count = indicator.count();
    if count == 0 {
        return Line::default();
    }

    let mut spans = Vec::new();
    for item in indicator.items() {
        if let (Some(side), Some(jump)) = (jump_side(item), indicator.jump()) {
            if jump.side == side {
                spans.push(Span::styled(
                    format!(" Go to: {}\u{2588} ", jump.input),
                    Style::default().fg(COLOR_HEADER).bg(COLOR_INPUT_BG),
                ));
                spans.push(Span::raw(" "));
                continue;
            }
        }

        let style = match item {
            PageItem::Page(n) if n == page => Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            _ if item.is_ellipsis() => Style::default().fg(COLOR_DIM),
            _ if item.target(page, count).is_some() => Style::default().fg(COLOR_HEADER),
            _ => Style::default().fg(COLOR_BORDER),
        };
        spans.push(Span::styled(format!(" {} ", item_label(item)), style));
    }

    spans.push(Span::styled(
        format!("  Page {} of {}", page, count),
        Style::default().fg(COLOR_DIM),
    ));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_indicator_text() {
        let line = page_indicator_line(&PageIndicator::new(5, 10));
        assert_eq!(
            text(&line),
            " «  ‹  …  4  5  6  …  ›  »   Page 5 of 10"
        );
    }

    #[test]
    fn test_no_pages_is_empty() {
        let line = page_indicator_line(&PageIndicator::new(1, 0));
        assert!(line.spans.is_empty());
    }

    #[test]
    fn test_jump_prompt_replaces_trailing_ellipsis() {
        let mut indicator = PageIndicator::new(5, 10);
        assert!(indicator.open_jump());
        indicator.push_char('8');
        let rendered = text(&page_indicator_line(&indicator));
        assert!(rendered.contains("Go to: 8"));
        // leading ellipsis is still shown
        assert!(rendered.starts_with(" «  ‹  … "));
        assert_eq!(rendered.matches('…').count(), 1);
    }
}
