//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for truncation, centering and common UI patterns.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the current wall-clock time.
pub fn spinner_frame() -> &'static str {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    SPINNER_FRAMES[(millis / 100) as usize % SPINNER_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate `text` to `max_width` display columns, ending in `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Human readable list of breeds for the filter bar.
pub fn format_breeds(breeds: &[String]) -> String {
    match breeds {
        [] => "All breeds".to_string(),
        [one] => one.clone(),
        [first, rest @ ..] => format!("{} +{}", first, rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_unchanged() {
        assert_eq!(truncate("Pug", 10), "Pug");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Labrador Retriever", 8), "Labrado…");
        assert_eq!(truncate("Labrador", 0), "");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
        assert_eq!(centered_rect(area, 200, 10).width, 100);
    }

    #[test]
    fn test_format_breeds() {
        assert_eq!(format_breeds(&[]), "All breeds");
        assert_eq!(format_breeds(&["Pug".to_string()]), "Pug");
        assert_eq!(
            format_breeds(&["Pug".to_string(), "Boxer".to_string(), "Akita".to_string()]),
            "Pug +2"
        );
    }

    #[test]
    fn test_inner_rect() {
        let area = Rect::new(0, 0, 10, 10);
        assert_eq!(inner_rect(area, 1), Rect::new(1, 1, 8, 8));
    }
}
