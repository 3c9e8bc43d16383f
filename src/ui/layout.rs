//! Responsive Layout System
//!
//! [`LayoutContext`] wraps the terminal dimensions and answers every sizing
//! question the screens ask: panel widths, how many dog cards fit per row,
//! dialog sizes. Key handling uses the same answers, so selection movement
//! always matches what is drawn.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 90 columns); favorites stack under the results
    pub const SM_WIDTH: u16 = 90;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
}

/// Width of one dog card, borders included
pub const CARD_WIDTH: u16 = 26;

/// Height of one dog card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Height of the favorites panel when stacked under the results
pub const STACKED_FAVORITES_HEIGHT: u16 = 9;

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
///
/// if ctx.should_stack_panels() {
///     // Favorites below the results
/// } else {
///     // Favorites to the right, `ctx.favorites_panel_width()` wide
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// # Example
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, but clamped to max of 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Search Screen Layout
    // ========================================================================

    /// Favorites go below the results on narrow terminals.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Width of the favorites panel in side-by-side mode.
    pub fn favorites_panel_width(&self) -> u16 {
        if self.should_stack_panels() {
            self.width
        } else {
            self.bounded_width(30, 30, 48)
        }
    }

    /// Width of the results panel, borders included.
    pub fn results_width(&self) -> u16 {
        if self.should_stack_panels() {
            self.width
        } else {
            self.width.saturating_sub(self.favorites_panel_width())
        }
    }

    /// Dog cards per grid row.
    pub fn grid_columns(&self) -> usize {
        (self.results_width().saturating_sub(2) / CARD_WIDTH).max(1) as usize
    }

    /// Width for a centered dialog: most of a small screen, half a large one.
    pub fn dialog_width(&self, min: u16, max: u16) -> u16 {
        if self.is_extra_small() {
            self.width.saturating_sub(4).min(max)
        } else if self.is_narrow() {
            self.bounded_width(80, min, max)
        } else {
            self.bounded_width(50, min, max)
        }
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
