//! Phrase Index Module
//!
//! Read-only lookup service over a dataset of South African phrases.
//!
//! ## Overview
//! The dataset is read once at startup, decoded into `Phrase` records and
//! indexed into three derived views (by term, by category, and the subset
//! carrying a Dutch explanation). After construction nothing is mutated
//! except the random source used for random picks, which is lock-protected.
//!
//! ## Submodules
//! - **`types`**: The `Phrase` record and HTTP response DTOs.
//! - **`error`**: `LoadError`, the only fallible path (construction).
//! - **`decode`**: Case-insensitive JSON decoding of the dataset.
//! - **`index`**: `PhraseIndex` and its five queries.
//! - **`handlers`**: Axum handlers exposing the queries over HTTP.

pub mod decode;
pub mod error;
pub mod handlers;
pub mod index;
pub mod types;
