//! Error handling for the Spidergen code generation library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling.
//!
//! # Examples
//!
//! ```
//! use spidergen_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for Spidergen rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Spidergen rendering operations
#[derive(Debug, Error)]
pub enum Error {
    /// The required spider name was empty
    #[error("missing required parameter: name")]
    EmptyName,

    /// Template engine error
    ///
    /// The template ships with the binary, so hitting this outside of
    /// development means a broken build artifact rather than bad user input.
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),
}
