//! Reusable UI Components
//!
//! Components shared by the login form and the overlays on the search
//! screen. All of them take a [`LayoutContext`](crate::ui::LayoutContext)
//! for responsive sizing.
//!
//! ## Components
//!
//! - `InputField` - Labeled text input with focus handling and inline errors
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;

pub use dialog_frame::{calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
