//! resume-tui: Terminal resume builder
//!
//! This crate mirrors a set of resume form fields into a live preview,
//! persists every edit to a local key/value store, applies presentation
//! settings (theme, template, accent color, font) and renders a
//! print-ready HTML document.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod session;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use session::{Command, Outcome, Session};
