//! postopia-search — command-line front end for the Postopia search vocabulary.
//!
//! The domain types live in [`postopia_core`]; this crate only adds the CLI
//! surface so integration tests can drive [`cli::run`] without spawning the
//! binary.

pub mod cli;

pub use postopia_core::{config, Error, SearchCategory, SearchEvent, SearchRequest, SearchSession};
