//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`navigation`] - Search screen: selection, favorites, filters, paging
//! - [`editing`] - Login and signup form input
//! - [`overlay`] - Breed picker, jump prompt and match modal

pub mod editing;
pub mod navigation;
pub mod overlay;

pub use editing::*;
pub use navigation::*;
pub use overlay::*;
