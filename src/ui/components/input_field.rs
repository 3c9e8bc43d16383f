//! Input Field Component
//!
//! A text input field with focus handling and inline error display.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed by an input field:
/// label (1) + input box (3) + error (1, if present).
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Render an input field with label, input box, and optional error.
///
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let label = Paragraph::new(Line::from(Span::styled(config.label, label_style)));
    frame.render_widget(label, label_area);
    y_offset += 1;

    let input_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 3,
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let (display_value, text_style) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() => {
            (placeholder, Style::default().fg(COLOR_DIM))
        }
        _ if config.focused => (config.value, Style::default().fg(Color::White)),
        _ => (config.value, Style::default().fg(COLOR_DIM)),
    };

    let mut spans = vec![Span::styled(display_value.to_string(), text_style)];
    if config.focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White))); // Block cursor
    }

    let input_text = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(input_text, input_area);
    y_offset += 3;

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x + 2,
            y: area.y + y_offset,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        let error_text = Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)), // X mark
            Span::styled(error, Style::default().fg(COLOR_ERROR)),
        ]));

        frame.render_widget(error_text, error_area);
        y_offset += 1;
    }

    y_offset
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Email", "")
            .focused(true)
            .error(Some("Invalid"))
            .placeholder("you@example.com");

        assert!(config.focused);
        assert_eq!(config.error, Some("Invalid"));
        assert_eq!(config.placeholder, Some("you@example.com"));
    }

    #[test]
    fn test_calculate_height() {
        let config = InputFieldConfig::new("Name", "Ada");
        assert_eq!(calculate_input_field_height(&config), 4);
        let config = config.error(Some("Please enter your name."));
        assert_eq!(calculate_input_field_height(&config), 5);
    }
}
