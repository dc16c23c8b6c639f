//! # Pitch Types
//!
//! Spelled notes and octave-qualified pitches.
//!
//! ## Key Types
//! - [`Letter`] - the seven natural note names
//! - [`Note`] - a spelled pitch class (`C`, `F#`, `Bbb`), no octave
//! - [`Pitch`] - a note in a specific octave (`E2`, `Bb3`), with a MIDI number
//!
//! ## Spelling Rules
//! - The letter is case-insensitive on input and always upper case on output
//! - Accidentals are `#` and `b`, at most two of the same kind
//! - Octaves are a single digit, `0` to `9`, scientific pitch notation (C4 = MIDI 60)
//!
//! ## MIDI Numbers
//! The MIDI number is computed from the *written* letter and octave, so
//! enharmonic spellings that cross an octave boundary land correctly:
//! `B#3` and `C4` are both 60, `Cb4` and `B3` are both 59.
//!
//! ```rust
//! use fretboard::Pitch;
//!
//! let low_e: Pitch = "E2".parse()?;
//! assert_eq!(low_e.midi_number(), 40);
//! assert_eq!(low_e.note().to_string(), "E");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::FretboardError;
use crate::interval::Interval;

/// Largest number of sharps or flats a [`Note`] may carry.
pub const MAX_ACCIDENTALS: i8 = 2;

/// Root notes offered by note pickers, in chromatic order.
pub const ROOT_NOTES: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

/// Natural note names C through B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within the C-based letter cycle (C = 0, B = 6)
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Semitones above C of the natural note
    pub fn semitones(self) -> i8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// A spelled pitch class.
///
/// `accidental` counts sharps (positive) or flats (negative) and is always
/// within `-MAX_ACCIDENTALS..=MAX_ACCIDENTALS`, so every `Note` has an entry
/// in the enharmonic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    letter: Letter,
    accidental: i8,
}

impl Note {
    /// Create a note, rejecting more than two accidentals.
    pub fn new(letter: Letter, accidental: i8) -> Option<Self> {
        if accidental.abs() > MAX_ACCIDENTALS {
            return None;
        }
        Some(Self { letter, accidental })
    }

    pub const fn natural(letter: Letter) -> Self {
        Self {
            letter,
            accidental: 0,
        }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i8 {
        self.accidental
    }

    /// Pitch class 0-11 (C = 0)
    pub fn pitch_class(&self) -> u8 {
        (self.letter.semitones() + self.accidental).rem_euclid(12) as u8
    }

    /// Spell the note `interval` above this one.
    ///
    /// The letter moves by the interval number and the accidental absorbs
    /// whatever semitone difference remains, so `C + d7` is `Bbb`, not `A`.
    ///
    /// ```rust
    /// use fretboard::{Interval, Note};
    ///
    /// let c: Note = "C".parse()?;
    /// let seventh: Interval = "d7".parse()?;
    /// assert_eq!(c.transpose(seventh)?.to_string(), "Bbb");
    /// # Ok::<(), fretboard::FretboardError>(())
    /// ```
    pub fn transpose(&self, interval: Interval) -> Result<Note, FretboardError> {
        let steps = self.letter.index() + usize::from(interval.number()) - 1;
        let letter = Letter::ALL[steps % 7];
        let octaves = (steps / 7) as i8;

        let target = self.letter.semitones() + self.accidental + interval.semitones();
        let natural = letter.semitones() + 12 * octaves;

        Note::new(letter, target - natural).ok_or_else(|| FretboardError::UnspellableNote {
            root: self.to_string(),
            interval: interval.to_string(),
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let symbol = if self.accidental > 0 { "#" } else { "b" };
        for _ in 0..self.accidental.abs() {
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Note {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_spelling(s)? {
            (note, None) => Ok(note),
            (_, Some(_)) => Err(unresolvable(s)),
        }
    }
}

/// A note in a specific octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    note: Note,
    octave: u8,
}

impl Pitch {
    pub const MAX_OCTAVE: u8 = 9;

    pub fn new(note: Note, octave: u8) -> Option<Self> {
        if octave > Self::MAX_OCTAVE {
            return None;
        }
        Some(Self { note, octave })
    }

    pub const fn natural(letter: Letter, octave: u8) -> Self {
        Self {
            note: Note::natural(letter),
            octave,
        }
    }

    /// Parse `E2`-style input, assigning `default_octave` when none is written.
    pub fn parse_with_default_octave(s: &str, default_octave: u8) -> Result<Self, FretboardError> {
        let (note, octave) = split_spelling(s)?;
        Pitch::new(note, octave.unwrap_or(default_octave)).ok_or_else(|| unresolvable(s))
    }

    pub fn note(&self) -> Note {
        self.note
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// MIDI note number (C4 = 60)
    pub fn midi_number(&self) -> u8 {
        let semitones = i16::from(self.note.letter.semitones()) + i16::from(self.note.accidental);
        (12 * (i16::from(self.octave) + 1) + semitones) as u8
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Pitch {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_spelling(s)? {
            (note, Some(octave)) => Pitch::new(note, octave).ok_or_else(|| unresolvable(s)),
            (_, None) => Err(unresolvable(s)),
        }
    }
}

fn unresolvable(input: &str) -> FretboardError {
    FretboardError::UnresolvablePitch {
        input: input.to_string(),
    }
}

/// Split `Bb3` into its note and optional octave.
fn split_spelling(input: &str) -> Result<(Note, Option<u8>), FretboardError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars().peekable();

    let letter = chars
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(|| unresolvable(input))?;

    let mut sharps: i8 = 0;
    let mut flats: i8 = 0;
    while let Some(&c) = chars.peek() {
        match c {
            '#' => sharps += 1,
            'b' => flats += 1,
            _ => break,
        }
        if sharps > MAX_ACCIDENTALS || flats > MAX_ACCIDENTALS {
            return Err(unresolvable(input));
        }
        chars.next();
    }
    if sharps > 0 && flats > 0 {
        return Err(unresolvable(input));
    }
    let note = Note::new(letter, sharps - flats).ok_or_else(|| unresolvable(input))?;

    let rest: String = chars.collect();
    let octave = match rest.as_str() {
        "" => None,
        digits if digits.len() == 1 => {
            Some(digits.parse::<u8>().map_err(|_| unresolvable(input))?)
        }
        _ => return Err(unresolvable(input)),
    };

    Ok((note, octave))
}
