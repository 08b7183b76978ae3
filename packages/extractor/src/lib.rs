//! Interface extraction core
//!
//! Line-oriented extraction of interface declarations from TypeScript
//! source text. The extractor recognizes structural boundaries one
//! physical line at a time; it is deliberately not a grammar parser.

pub mod entities;
pub mod extractor;

pub use entities::{InterfaceEntry, PropertyEntry};
pub use extractor::InterfaceExtractor;
