//! # Tunings
//!
//! Parsing of tuning lists and the standard tunings of common fretted
//! instruments.
//!
//! Tunings are always written low-to-high in playing order, the way players
//! name them ("E A D G B E"). The fretboard engine reverses them internally.
//!
//! ## Octaves
//! Entries may omit the octave. Such entries are placed in octave 4, except
//! for the bare standard guitar list `E A D G B E`, which is read as
//! `E2 A2 D3 G3 B3 E4`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FretboardError;
use crate::pitch::{Letter, Pitch};

/// Octave assigned to tuning entries written without one
pub const DEFAULT_OCTAVE: u8 = 4;

const BARE_GUITAR: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Parse a low-to-high tuning list into pitches.
pub fn parse_tuning<S: AsRef<str>>(tuning: &[S]) -> Result<Vec<Pitch>, FretboardError> {
    if tuning.is_empty() {
        return Err(FretboardError::EmptyTuning);
    }

    let bare_guitar = tuning.len() == BARE_GUITAR.len()
        && tuning
            .iter()
            .zip(BARE_GUITAR)
            .all(|(entry, name)| entry.as_ref().trim() == name);
    if bare_guitar {
        return Ok(Instrument::Guitar.tuning());
    }

    tuning
        .iter()
        .map(|entry| Pitch::parse_with_default_octave(entry.as_ref(), DEFAULT_OCTAVE))
        .collect()
}

/// Split `"E2 A2 D3"` or `"E2,A2,D3"` into entries
pub fn split_tuning(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Instruments with a built-in standard tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Guitar,
    Bass,
    Ukulele,
    Banjo,
    Mandolin,
}

impl Instrument {
    pub const ALL: [Instrument; 5] = [
        Instrument::Guitar,
        Instrument::Bass,
        Instrument::Ukulele,
        Instrument::Banjo,
        Instrument::Mandolin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::Bass => "bass",
            Instrument::Ukulele => "ukulele",
            Instrument::Banjo => "banjo",
            Instrument::Mandolin => "mandolin",
        }
    }

    /// Standard tuning, low-to-high in playing order
    pub fn tuning(self) -> Vec<Pitch> {
        use Letter::*;
        let strings: &[(Letter, u8)] = match self {
            Instrument::Guitar => &[(E, 2), (A, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
            Instrument::Bass => &[(E, 1), (A, 1), (D, 2), (G, 2)],
            // Re-entrant: the G string is above the C
            Instrument::Ukulele => &[(G, 4), (C, 4), (E, 4), (A, 4)],
            // Open G, short fifth string first
            Instrument::Banjo => &[(G, 4), (D, 3), (G, 3), (B, 3), (D, 4)],
            Instrument::Mandolin => &[(G, 3), (D, 4), (A, 4), (E, 5)],
        };
        strings
            .iter()
            .map(|(letter, octave)| Pitch::natural(*letter, *octave))
            .collect()
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|instrument| instrument.name() == lowered)
            .ok_or_else(|| FretboardError::Config(format!("Unknown instrument: {}", s.trim())))
    }
}
