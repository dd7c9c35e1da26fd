//! Saffa Phrase Service Library
//!
//! Serves short South African cultural-phrase records over read-only lookup
//! endpoints. The binary (`main.rs`) loads the dataset once and exposes it
//! through axum.
//!
//! ## Modules
//! - **`phrases`**: The `Phrase` record, dataset decoding, and the immutable
//!   `PhraseIndex` answering random, by-term, by-category and Dutch-subset queries.
//! - **`server`**: Configuration parsing and HTTP route wiring.

pub mod phrases;
pub mod server;
