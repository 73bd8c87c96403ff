//! UI components for resume-tui.
//!
//! This module contains:
//! - layout: Main layout rendering
//! - input: Keyboard input handling
//! - widgets: Form, preview, editor, dialogs and help

pub mod input;
pub mod layout;
pub mod widgets;
