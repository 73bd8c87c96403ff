//! Reusable UI widgets for resume-tui.

pub mod dialog;
pub mod editor;
pub mod form;
pub mod help;
pub mod preview;
pub mod text_input;
