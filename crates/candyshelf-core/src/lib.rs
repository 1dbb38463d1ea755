//! Core types and trait definitions for the candyshelf application.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod candy;
pub mod form;
pub mod store;

pub use candy::{Candy, CandyAttrs, Standing};
pub use form::{FieldError, FormErrors};
