//! Server Wiring
//!
//! Startup configuration and HTTP routing for the phrase service binary.
//!
//! - **`config`**: Command-line and environment driven `ServerConfig`.
//! - **`routes`**: Builds the axum `Router` around a shared `PhraseIndex`.

pub mod config;
pub mod routes;

#[cfg(test)]
mod tests;
