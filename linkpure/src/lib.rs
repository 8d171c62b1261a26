//! Link Purifier Core - link extraction and classification for pasted text
//!
//! Pulls HTTP(S) and magnet links out of free-form text (deduplicated, in
//! source order) and maps each link to a display category with its icon and
//! colors. The Swift UI owns the window, clipboard and hotkey; it calls
//! `extract_links` on every text change and `classify_link` per row.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Enum)]).

pub mod classifier;
pub mod config;
pub mod detection;
pub mod extractor;
pub mod interface;
mod palette;

pub use classifier::classify;
pub use config::ExtractorConfig;
pub use extractor::{extract, LinkExtractor};
pub use interface::*;

uniffi::setup_scaffolding!("linkpure");
