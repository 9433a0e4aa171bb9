//! Signature extraction for docdrift.
//!
//! Code extractors (Python, TypeScript/JavaScript) run on tree-sitter; doc
//! extractors (Markdown, RST) are line-oriented regex scanners. The
//! [`collect::SignatureCollector`] walks a directory, dispatches each file to
//! the extractor registered for its extension and returns a location-sorted
//! signature list ready for the engine.

pub mod collect;
pub mod extractor;
pub mod markdown;
pub mod params;
pub mod rst;
pub mod treesitter;
pub mod walker;

pub mod python;
pub mod typescript;

pub use collect::SignatureCollector;
pub use extractor::{CodeExtractor, DocExtractor, ExtractError};
