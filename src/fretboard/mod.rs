//! # Fretboard Module
//!
//! Lay out the notes of a chord or scale across every string and fret of a
//! fretted instrument.
//!
//! ## Purpose
//! Given a tuning and a [`Selection`](crate::Selection), the engine produces
//! three aligned grids, one row per string and one column per fret:
//! 1. **Notes** - the spelled note at that fret, or `""`
//! 2. **Intervals** - the interval label of that note, or `""`
//! 3. **MIDI** - the MIDI number of every fret, selected or not
//!
//! ## Sub-modules
//! - `types` - FretWindow, Diagram, BuildWarning
//! - `engine` - Fretboard construction and the build algorithm
//!
//! ## Key Types
//! - [`Fretboard`] - a tuned instrument with one chromatic lane per string
//! - [`FretWindow`] - inclusive fret range to show, `(0, 24)` by default
//! - [`Diagram`] - the three grids plus title and warnings
//!
//! ## Example
//!
//! ```rust
//! use fretboard::{FretWindow, Fretboard, Selection};
//!
//! let board = Fretboard::new(&["E2", "A2", "D3", "G3", "B3", "E4"])?;
//! let diagram = board.build(Some(&Selection::parse("C", "major")?), Some(FretWindow::new(0, 3)));
//!
//! // Rows run from the highest string down
//! assert_eq!(diagram.notes[0], vec!["E", "F", "", "G"]);
//! assert_eq!(diagram.intervals[0], vec!["M3", "P4", "", "P5"]);
//! assert_eq!(diagram.midi[0], vec![64, 65, 66, 67]);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```
//!
//! ## String Order
//!
//! Tunings are given low-to-high ("E A D G B E") but every grid is ordered
//! high-to-low, the way a fretboard looks to the player looking down at it.
//!
//! ## Chromatic Lanes
//!
//! Each string gets a 25-entry lane of enharmonic group indices, starting at
//! the group of the open string and counting up one semitone per fret:
//! index 0 is the open string and index 24 the 24th fret. Matching a note
//! against a fret is a lookup of the note's spelling in that group.
//!
//! ## Related Modules
//! - `enharmonic` - the group table the lanes index into
//! - `selection` - what gets placed
//! - `render` - plain-text output of a Diagram

mod engine;
mod types;


pub use engine::{Fretboard, Lane, FRET_POSITIONS, MAX_FRET};
pub use types::{BuildWarning, Diagram, FretWindow, Grid};
