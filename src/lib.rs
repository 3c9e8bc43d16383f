//! Fetch Dogs - a terminal client for finding a shelter dog to adopt
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod input;
pub mod logging;
pub mod matching;
pub mod models;
pub mod notifications;
pub mod route;
pub mod search;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
