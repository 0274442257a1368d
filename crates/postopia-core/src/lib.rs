//! postopia-core — search vocabulary for the Postopia client.
//!
//! This crate owns the closed set of [`SearchCategory`] values and the
//! case-insensitive lookup from a text label, plus the pieces built directly
//! on top of it: configuration, request descriptions, and the paging state of
//! a search screen. Running searches is left to the caller.
//!
//! ```text
//! label ──► SearchCategory ──► SearchRequest ──► (caller runs it)
//!                  ▲                  ▲
//!   tab index ─────┘    SearchSession ┘
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod request;
pub mod session;

pub use category::SearchCategory;
pub use error::{Error, Result};
pub use request::SearchRequest;
pub use session::{SearchEvent, SearchSession};
