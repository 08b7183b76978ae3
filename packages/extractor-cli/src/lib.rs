#![deny(clippy::all)]

/**
 * ifdoc CLI
 *
 * Command line tooling around the interface extractor: source
 * collection, markdown rendering, logging and the pipeline entry point.
 */
pub use ifdoc_extractor as extractor;

// CLI-specific modules
pub mod collector;
pub mod logging;
pub mod main_entry;
pub mod render;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
