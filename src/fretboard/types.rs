//! Fretboard diagram type definitions
//!
//! This module defines the fret window, the built diagram and the warnings a
//! build can raise.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::engine::MAX_FRET;
use crate::selection::Selection;

/// Rows are strings (highest first), columns are frets
pub type Grid<T> = Vec<Vec<T>>;

/// Inclusive range of frets to show.
///
/// Bounds are signed so that out-of-range requests from any front end (CLI,
/// YAML, JavaScript) reach the engine intact and are reported rather than
/// silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretWindow {
    pub from: i32,
    pub to: i32,
}

impl FretWindow {
    /// The whole neck, open strings through fret 24
    pub const FULL: FretWindow = FretWindow {
        from: 0,
        to: MAX_FRET as i32,
    };

    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Window from two frets picked in any order
    pub fn sorted(a: i32, b: i32) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    pub fn is_valid(&self) -> bool {
        let frets = 0..=MAX_FRET as i32;
        frets.contains(&self.from) && frets.contains(&self.to) && self.from <= self.to
    }

    /// Number of columns the window covers
    pub fn width(&self) -> usize {
        (self.to - self.from + 1).max(0) as usize
    }
}

impl Default for FretWindow {
    fn default() -> Self {
        Self::FULL
    }
}

/// Something the engine corrected instead of failing on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BuildWarning {
    /// The requested window was out of range or inverted; the full neck is shown.
    FretWindowReset { from: i32, to: i32 },
    /// No chord or scale was supplied; C major is shown.
    DefaultSelection,
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::FretWindowReset { from, to } => write!(
                f,
                "Frets must be between 0 and {} (got {} to {}), showing the whole neck",
                MAX_FRET, from, to
            ),
            BuildWarning::DefaultSelection => {
                write!(f, "No chord or scale supplied, reverting to C major")
            }
        }
    }
}

/// Result of [`Fretboard::build`](super::Fretboard::build)
///
/// # Fields
/// - `tuning`: open-string spellings, highest string first
/// - `title`: heading such as `C major scale: C D E F G A B`
/// - `window`: the fret window actually used (after validation)
/// - `notes`: note name per cell, `""` when nothing is placed there
/// - `intervals`: interval label per cell, same empty cells as `notes`
/// - `midi`: MIDI number of every cell
/// - `warnings`: corrections applied while building
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub tuning: Vec<String>,
    pub title: String,
    pub window: FretWindow,
    pub notes: Grid<String>,
    pub intervals: Grid<String>,
    pub midi: Grid<u8>,
    pub warnings: Vec<BuildWarning>,
    #[serde(skip)]
    pub selection: Selection,
}

impl Diagram {
    pub fn string_count(&self) -> usize {
        self.notes.len()
    }

    /// Frets covered by the columns, in order
    pub fn frets(&self) -> RangeInclusive<i32> {
        self.window.from..=self.window.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_validation() {
        assert!(FretWindow::FULL.is_valid());
        assert!(FretWindow::new(5, 5).is_valid());
        assert!(!FretWindow::new(5, 3).is_valid());
        assert!(!FretWindow::new(-1, 3).is_valid());
        assert!(!FretWindow::new(0, 25).is_valid());
    }

    #[test]
    fn test_window_sorted_and_width() {
        let window = FretWindow::sorted(7, 3);
        assert_eq!(window, FretWindow::new(3, 7));
        assert_eq!(window.width(), 5);
        assert_eq!(FretWindow::FULL.width(), 25);
    }

    #[test]
    fn test_warning_messages() {
        let warning = BuildWarning::FretWindowReset { from: 5, to: 3 };
        assert_eq!(
            warning.to_string(),
            "Frets must be between 0 and 24 (got 5 to 3), showing the whole neck"
        );
    }
}
