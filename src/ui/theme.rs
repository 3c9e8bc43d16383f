//! Color theme constants for the Fetch Dogs UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel or selected card
pub const COLOR_FOCUS: Color = Color::White;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::Rgb(25, 118, 210); // blue #1976D2

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Favorite marker
pub const COLOR_FAVORITE: Color = Color::Rgb(233, 30, 99); // pink #E91E63

/// Error text and banners
pub const COLOR_ERROR: Color = Color::Red;

/// Informational notices
pub const COLOR_INFO: Color = Color::Cyan;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialogs and overlays
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Background for input fields
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the snackbar
pub const COLOR_SNACKBAR_BG: Color = Color::Rgb(50, 50, 50);
