//! Shared building blocks for the Reviewify service.
//!
//! This crate holds everything the resource crates have in common: the API
//! error taxonomy with its HTTP rendering, the link formatting used to attach
//! `self`/`business` URLs to representations, and logging initialization.

pub mod error;
pub mod links;
pub mod logging;

pub use error::{ApiError, HttpStatusCode};
pub use links::LinkBuilder;
