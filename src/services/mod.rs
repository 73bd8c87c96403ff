//! Infrastructure services for resume-tui.
//!
//! This module contains:
//! - Store: durable key/value storage (file and in-memory)
//! - Export: print document validation and rendering
//! - PrintHandoff: delivery of a document to the host print flow
//! - Platform: system theme detection and default opener

mod export;
pub mod platform;
mod print;
mod store;

pub use export::{escape_html, is_valid_email, validate, PrintDocument};
pub use print::PrintHandoff;
pub use store::{FileStore, MemoryStore, Store, STORE_FILE};
