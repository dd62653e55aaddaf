//! Storage layer for the expense tracker
//!
//! Persists the ledger and budget table as a single JSON document. Every
//! save rewrites the whole file; there is no locking between processes.

pub mod document;
pub mod file_io;

pub use document::{load_document, save_document, LoadOutcome, LoadStatus, DEFAULT_DATA_FILE};
pub use file_io::{read_json, write_json_atomic};
