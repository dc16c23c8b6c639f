//! # Enharmonic Table
//!
//! The twelve groups of spellings that share a pitch class, in chromatic
//! order starting at C. Group `i` holds every spelling with pitch class `i`
//! that uses at most two accidentals, so the groups partition all spellings
//! a [`Note`] can take.
//!
//! ```text
//!  0  C   B#  Dbb        6  F#  Gb  E##
//!  1  C#  Db  B##        7  G   F## Abb
//!  2  D   C## Ebb        8  G#  Ab
//!  3  D#  Eb  Fbb        9  A   G## Bbb
//!  4  E   D## Fb        10  A#  Bb  Cbb
//!  5  F   E#  Gbb       11  B   A## Cb
//! ```
//!
//! Group order is cyclic: the group after 11 is 0.

use crate::pitch::{Note, ROOT_NOTES};

/// Number of enharmonic groups (pitch classes)
pub const GROUP_COUNT: usize = 12;

/// One pitch class and all of its spellings
#[derive(Debug, PartialEq, Eq)]
pub struct EnharmonicGroup {
    spellings: &'static [&'static str],
}

impl EnharmonicGroup {
    const fn new(spellings: &'static [&'static str]) -> Self {
        Self { spellings }
    }

    pub fn spellings(&self) -> &'static [&'static str] {
        self.spellings
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.spellings.contains(&spelling)
    }

    pub fn contains_note(&self, note: &Note) -> bool {
        self.contains(&note.to_string())
    }
}

pub static ENHARMONICS: [EnharmonicGroup; GROUP_COUNT] = [
    EnharmonicGroup::new(&["C", "B#", "Dbb"]),
    EnharmonicGroup::new(&["C#", "Db", "B##"]),
    EnharmonicGroup::new(&["D", "C##", "Ebb"]),
    EnharmonicGroup::new(&["D#", "Eb", "Fbb"]),
    EnharmonicGroup::new(&["E", "D##", "Fb"]),
    EnharmonicGroup::new(&["F", "E#", "Gbb"]),
    EnharmonicGroup::new(&["F#", "Gb", "E##"]),
    EnharmonicGroup::new(&["G", "F##", "Abb"]),
    EnharmonicGroup::new(&["G#", "Ab"]),
    EnharmonicGroup::new(&["A", "G##", "Bbb"]),
    EnharmonicGroup::new(&["A#", "Bb", "Cbb"]),
    EnharmonicGroup::new(&["B", "A##", "Cb"]),
];

/// Index of the group holding `spelling`, if any
pub fn group_index(spelling: &str) -> Option<usize> {
    ENHARMONICS.iter().position(|group| group.contains(spelling))
}

/// Index of the group holding `note`.
///
/// Every `Note` is limited to two accidentals and the table lists every
/// such spelling, so a miss means the table itself is broken.
pub fn group_of(note: &Note) -> usize {
    let spelling = note.to_string();
    group_index(&spelling)
        .unwrap_or_else(|| unreachable!("enharmonic table has no group for '{}'", spelling))
}

/// The spelling from [`ROOT_NOTES`] that shares a group with `spelling`.
///
/// Used when a fretboard label is picked as the new root: `E#` becomes `F`,
/// `Db` stays `Db`.
pub fn root_spelling(spelling: &str) -> Option<&'static str> {
    if let Some(root) = ROOT_NOTES.iter().copied().find(|root| *root == spelling) {
        return Some(root);
    }
    let group = &ENHARMONICS[group_index(spelling)?];
    ROOT_NOTES.iter().copied().find(|root| group.contains(root))
}
