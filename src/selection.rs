//! # Chord-or-Scale Selection
//!
//! The thing a fretboard diagram shows: either a chord or a scale, both
//! reduced to the same shape (an ordered note list paired 1:1 with an ordered
//! interval list) so the engine has a single extraction path.
//!
//! ## Octave Removal
//! Chords whose recipe includes the octave (`open5` = `P1 P5 P8`) would list
//! the root twice. Fret 0 and fret 12 already show the root, so
//! [`Selection::placements`] drops the `P8` pair for chords. Scales are never
//! filtered.
//!
//! ## Example
//! ```rust
//! use fretboard::Selection;
//!
//! let selection = Selection::parse("A", "min")?;
//! assert_eq!(selection.title(), "A minor chord: A C E");
//!
//! // Scale names are tried first, as on the command line
//! let selection = Selection::parse("A", "natural_minor")?;
//! assert_eq!(selection.title(), "A natural minor scale: A B C D E F G");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::Serialize;

use crate::chord::{Chord, ChordType};
use crate::error::FretboardError;
use crate::interval::Interval;
use crate::pitch::{Letter, Note};
use crate::scale::{Scale, ScaleType};

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Chord(Chord),
    Scale(Scale),
}

/// A note to place on the fretboard together with its interval label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub note: Note,
    pub interval: Interval,
}

impl Selection {
    pub fn chord(root: &str, chord_type: &str) -> Result<Self, FretboardError> {
        Ok(Selection::Chord(Chord::new(root.parse()?, chord_type.parse()?)?))
    }

    pub fn scale(root: &str, scale_type: &str) -> Result<Self, FretboardError> {
        Ok(Selection::Scale(Scale::new(root.parse()?, scale_type.parse()?)?))
    }

    /// Resolve `type_name` as a scale type, falling back to a chord type.
    pub fn parse(root: &str, type_name: &str) -> Result<Self, FretboardError> {
        let root: Note = root.parse()?;
        if let Ok(scale_type) = type_name.parse::<ScaleType>() {
            return Ok(Selection::Scale(Scale::new(root, scale_type)?));
        }
        match type_name.parse::<ChordType>() {
            Ok(chord_type) => Ok(Selection::Chord(Chord::new(root, chord_type)?)),
            Err(_) => Err(FretboardError::UnknownScaleType(type_name.trim().to_string())),
        }
    }

    pub fn root(&self) -> Note {
        match self {
            Selection::Chord(chord) => chord.root(),
            Selection::Scale(scale) => scale.root(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        match self {
            Selection::Chord(chord) => chord.notes(),
            Selection::Scale(scale) => scale.notes(),
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        match self {
            Selection::Chord(chord) => chord.intervals(),
            Selection::Scale(scale) => scale.intervals(),
        }
    }

    pub fn is_chord(&self) -> bool {
        matches!(self, Selection::Chord(_))
    }

    /// `"chord"` or `"scale"`
    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Chord(_) => "chord",
            Selection::Scale(_) => "scale",
        }
    }

    /// Recipe name such as `dom7` or `natural_minor`; `custom` for custom scales
    pub fn type_name(&self) -> &'static str {
        match self {
            Selection::Chord(chord) => chord.chord_type().name(),
            Selection::Scale(scale) => scale.scale_type().map(ScaleType::name).unwrap_or("custom"),
        }
    }

    /// Note/interval pairs to place on the fretboard.
    ///
    /// For chords the first octave pair is removed.
    pub fn placements(&self) -> Vec<Placement> {
        let mut placements: Vec<Placement> = self
            .notes()
            .iter()
            .zip(self.intervals())
            .map(|(note, interval)| Placement {
                note: *note,
                interval: *interval,
            })
            .collect();

        if self.is_chord() {
            if let Some(index) = placements.iter().position(|p| p.interval == Interval::OCTAVE) {
                placements.remove(index);
            }
        }
        placements
    }

    /// Human readable heading, e.g. `C major scale: C D E F G A B`
    pub fn title(&self) -> String {
        let name = match self {
            Selection::Chord(chord) => chord.chord_type().long_name().to_string(),
            Selection::Scale(scale) => scale.display_name(),
        };
        let notes: Vec<String> = self.notes().iter().map(|n| n.to_string()).collect();
        format!("{} {} {}: {}", self.root(), name, self.kind(), notes.join(" "))
    }

    /// Flip between major and minor flavours of the same kind.
    ///
    /// Custom scales become the major scale on the same root.
    pub fn toggle_major_minor(&self) -> Result<Self, FretboardError> {
        match self {
            Selection::Chord(chord) => Ok(Selection::Chord(Chord::new(
                chord.root(),
                chord.chord_type().toggled_quality(),
            )?)),
            Selection::Scale(scale) => {
                let next = scale
                    .scale_type()
                    .map(ScaleType::toggled_quality)
                    .unwrap_or(ScaleType::Major);
                Ok(Selection::Scale(Scale::new(scale.root(), next)?))
            }
        }
    }

    /// Switch between chord and scale on the same root, keeping minor
    /// selections minor.
    pub fn switch_kind(&self) -> Result<Self, FretboardError> {
        match self {
            Selection::Scale(scale) => {
                let minor = scale.scale_type().map(ScaleType::is_minor).unwrap_or(false);
                let chord_type = if minor { ChordType::Min } else { ChordType::Maj };
                Ok(Selection::Chord(Chord::new(scale.root(), chord_type)?))
            }
            Selection::Chord(chord) => {
                let scale_type = if chord.chord_type().name().contains("min") {
                    ScaleType::NaturalMinor
                } else {
                    ScaleType::Major
                };
                Ok(Selection::Scale(Scale::new(chord.root(), scale_type)?))
            }
        }
    }
}

impl Default for Selection {
    /// The C major scale
    fn default() -> Self {
        match Scale::new(Note::natural(Letter::C), ScaleType::Major) {
            Ok(scale) => Selection::Scale(scale),
            Err(e) => unreachable!("C major must be spellable: {}", e),
        }
    }
}
