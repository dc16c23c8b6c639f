//! # Error Types
//!
//! This module defines all error types for the fretboard library.
//!
//! Every error carries the offending input so that a front end (CLI, browser,
//! config loader) can tell the user exactly which value to fix.
//!
//! ## Error Types
//! - `UnresolvablePitch` - a pitch spelling that names no note (tuning entry, root note)
//! - `EmptyTuning` - a tuning with no strings
//! - `InvalidInterval` - an interval label that is not well formed
//! - `UnknownChordType` / `UnknownScaleType` - names missing from the recipe tables
//! - `UnspellableNote` - an interval that would need more than two accidentals
//! - `Config` - invalid YAML diagram configuration
//!
//! ## Usage
//! ```rust
//! use fretboard::{Fretboard, FretboardError};
//!
//! match Fretboard::new(&["E2", "A2", "H2"]) {
//!     Ok(_) => unreachable!(),
//!     Err(FretboardError::UnresolvablePitch { input }) => {
//!         assert_eq!(input, "H2");
//!     }
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretboardError {
    /// A pitch spelling that does not resolve to any enharmonic group.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnresolvablePitch { input: "H2".to_string() };
    /// assert_eq!(err.to_string(), "Unresolvable pitch: 'H2'");
    /// ```
    #[error("Unresolvable pitch: '{input}'")]
    UnresolvablePitch { input: String },

    /// A tuning needs at least one string.
    #[error("Tuning must contain at least one string")]
    EmptyTuning,

    /// Interval labels look like `P5`, `m3`, `A4`, `d7`.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidInterval("X3".to_string());
    /// assert_eq!(err.to_string(), "Invalid interval: X3");
    /// ```
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    #[error("Unknown scale type: {0}")]
    UnknownScaleType(String),

    /// Spelling `root` up by `interval` would need a triple sharp or flat.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnspellableNote {
    ///     root: "Cb".to_string(),
    ///     interval: "d7".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Cannot spell d7 above Cb with at most two accidentals");
    /// ```
    #[error("Cannot spell {interval} above {root} with at most two accidentals")]
    UnspellableNote { root: String, interval: String },

    /// Invalid diagram configuration.
    ///
    /// Occurs when the YAML is malformed or its values contradict each other.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
