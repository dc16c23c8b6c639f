//! # Chords
//!
//! Chord recipes as interval lists, spelled from a root note.
//!
//! ## Supported Chord Types
//! - **Triads**: `maj`, `min`, `aug`, `dim`
//! - **Sevenths**: `dom7`, `min7`, `maj7`, `aug7`, `dim7`, `m7dim5`
//! - **Suspended**: `sus2`, `sus4`
//! - **Power chord**: `open5` (root, fifth and the octave)
//!
//! ## Example
//! ```rust
//! use fretboard::{Chord, ChordType};
//!
//! let chord = Chord::new("C".parse()?, ChordType::Dim7)?;
//! let notes: Vec<String> = chord.notes().iter().map(|n| n.to_string()).collect();
//! assert_eq!(notes, vec!["C", "Eb", "Gb", "Bbb"]);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;
use crate::interval::Interval;
use crate::pitch::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordType {
    Maj,
    Min,
    Aug,
    Dim,
    Dom7,
    Min7,
    Maj7,
    Aug7,
    Dim7,
    M7Dim5,
    Sus2,
    Sus4,
    Open5,
}

impl ChordType {
    pub const ALL: [ChordType; 13] = [
        ChordType::Maj,
        ChordType::Min,
        ChordType::Aug,
        ChordType::Dim,
        ChordType::Dom7,
        ChordType::Min7,
        ChordType::Maj7,
        ChordType::Aug7,
        ChordType::Dim7,
        ChordType::M7Dim5,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Open5,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Maj => "maj",
            ChordType::Min => "min",
            ChordType::Aug => "aug",
            ChordType::Dim => "dim",
            ChordType::Dom7 => "dom7",
            ChordType::Min7 => "min7",
            ChordType::Maj7 => "maj7",
            ChordType::Aug7 => "aug7",
            ChordType::Dim7 => "dim7",
            ChordType::M7Dim5 => "m7dim5",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Open5 => "open5",
        }
    }

    /// Name used in titles: the triad abbreviations are spelled out
    pub fn long_name(self) -> &'static str {
        match self {
            ChordType::Maj => "major",
            ChordType::Min => "minor",
            ChordType::Aug => "augmented",
            ChordType::Dim => "diminished",
            other => other.name(),
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    /// Interval labels of the recipe, root first
    pub fn recipe(self) -> &'static [&'static str] {
        match self {
            ChordType::Maj => &["P1", "M3", "P5"],
            ChordType::Min => &["P1", "m3", "P5"],
            ChordType::Aug => &["P1", "M3", "A5"],
            ChordType::Dim => &["P1", "m3", "d5"],
            ChordType::Dom7 => &["P1", "M3", "P5", "m7"],
            ChordType::Min7 => &["P1", "m3", "P5", "m7"],
            ChordType::Maj7 => &["P1", "M3", "P5", "M7"],
            ChordType::Aug7 => &["P1", "M3", "A5", "m7"],
            ChordType::Dim7 => &["P1", "m3", "d5", "d7"],
            ChordType::M7Dim5 => &["P1", "m3", "d5", "m7"],
            ChordType::Sus2 => &["P1", "M2", "P5"],
            ChordType::Sus4 => &["P1", "P4", "P5"],
            ChordType::Open5 => &["P1", "P5", "P8"],
        }
    }

    pub fn intervals(self) -> Vec<Interval> {
        self.recipe()
            .iter()
            .map(|label| {
                label
                    .parse()
                    .unwrap_or_else(|_| unreachable!("bad interval '{}' in chord recipe", label))
            })
            .collect()
    }

    /// The major/minor counterpart: anything containing "maj" goes to
    /// `min`, everything else to `maj`.
    pub fn toggled_quality(self) -> ChordType {
        if self.name().contains("maj") {
            ChordType::Min
        } else {
            ChordType::Maj
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordType {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == trimmed)
            .ok_or_else(|| FretboardError::UnknownChordType(trimmed.to_string()))
    }
}

/// A chord spelled from its root
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    root: Note,
    chord_type: ChordType,
    notes: Vec<Note>,
    intervals: Vec<Interval>,
}

impl Chord {
    pub fn new(root: Note, chord_type: ChordType) -> Result<Self, FretboardError> {
        let intervals = chord_type.intervals();
        let notes = intervals
            .iter()
            .map(|interval| root.transpose(*interval))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            root,
            chord_type,
            notes,
            intervals,
        })
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn chord_type(&self) -> ChordType {
        self.chord_type
    }

    /// Notes in recipe order, including the octave for `open5`
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(chord: &Chord) -> Vec<String> {
        chord.notes().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_every_recipe_parses() {
        for chord_type in ChordType::ALL {
            assert_eq!(chord_type.intervals().len(), chord_type.recipe().len());
            assert_eq!(chord_type.intervals()[0], Interval::UNISON);
        }
    }

    #[test]
    fn test_spell_chords() {
        let c = "C".parse().unwrap();
        assert_eq!(spelled(&Chord::new(c, ChordType::Maj).unwrap()), vec!["C", "E", "G"]);
        assert_eq!(
            spelled(&Chord::new(c, ChordType::M7Dim5).unwrap()),
            vec!["C", "Eb", "Gb", "Bb"]
        );
        assert_eq!(spelled(&Chord::new(c, ChordType::Open5).unwrap()), vec!["C", "G", "C"]);

        let a_sharp = "A#".parse().unwrap();
        assert_eq!(
            spelled(&Chord::new(a_sharp, ChordType::Aug).unwrap()),
            vec!["A#", "C##", "E##"]
        );
    }

    #[test]
    fn test_open5_contains_octave() {
        let chord = Chord::new("E".parse().unwrap(), ChordType::Open5).unwrap();
        assert!(chord.intervals().contains(&Interval::OCTAVE));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("dom7".parse::<ChordType>().unwrap(), ChordType::Dom7);
        assert_eq!(
            "seventh".parse::<ChordType>(),
            Err(FretboardError::UnknownChordType("seventh".to_string()))
        );
        assert_eq!(ChordType::names().len(), 13);
    }

    #[test]
    fn test_toggled_quality() {
        assert_eq!(ChordType::Maj.toggled_quality(), ChordType::Min);
        assert_eq!(ChordType::Maj7.toggled_quality(), ChordType::Min);
        assert_eq!(ChordType::Min7.toggled_quality(), ChordType::Maj);
        assert_eq!(ChordType::Sus4.toggled_quality(), ChordType::Maj);
    }
}
