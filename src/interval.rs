//! Interval labels (`P1`, `m3`, `A4`, `P8`, ...) and their sizes in semitones.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::FretboardError;

/// Interval quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Perfect,    // P
    Major,      // M
    Minor,      // m
    Augmented,  // A
    Diminished, // d
}

impl Quality {
    pub fn symbol(self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None,
        }
    }
}

/// A diatonic interval such as a minor third or a perfect fifth.
///
/// Numbers run from 1 (unison) to 15 (double octave). Unisons, fourths,
/// fifths and their compounds are perfect-type and accept `P`, `A` and `d`;
/// all other numbers accept `M`, `m`, `A` and `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    quality: Quality,
    number: u8,
}

impl Interval {
    pub const UNISON: Interval = Interval {
        quality: Quality::Perfect,
        number: 1,
    };

    pub const OCTAVE: Interval = Interval {
        quality: Quality::Perfect,
        number: 8,
    };

    pub const MAX_NUMBER: u8 = 15;

    pub fn new(quality: Quality, number: u8) -> Option<Self> {
        if number == 0 || number > Self::MAX_NUMBER {
            return None;
        }
        let allowed = match quality {
            Quality::Perfect => is_perfect_type(number),
            Quality::Major | Quality::Minor => !is_perfect_type(number),
            Quality::Augmented | Quality::Diminished => true,
        };
        allowed.then_some(Self { quality, number })
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Size of the interval in semitones (`m3` = 3, `P8` = 12, `d7` = 9)
    pub fn semitones(&self) -> i8 {
        const MAJOR_SCALE: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];
        let steps = (self.number - 1) as usize;
        let base = MAJOR_SCALE[steps % 7] + 12 * (steps / 7) as i8;

        let adjustment = match (self.quality, is_perfect_type(self.number)) {
            (Quality::Perfect | Quality::Major, _) => 0,
            (Quality::Minor, _) => -1,
            (Quality::Augmented, _) => 1,
            (Quality::Diminished, true) => -1,
            (Quality::Diminished, false) => -2,
        };
        base + adjustment
    }
}

fn is_perfect_type(number: u8) -> bool {
    matches!((number - 1) % 7, 0 | 3 | 4)
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality.symbol(), self.number)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Interval {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FretboardError::InvalidInterval(s.to_string());
        let mut chars = s.trim().chars();
        let quality = chars.next().and_then(Quality::from_symbol).ok_or_else(invalid)?;
        let number: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        Interval::new(quality, number).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(label: &str) -> Interval {
        label.parse().unwrap()
    }

    #[test]
    fn test_semitones() {
        let expected = [
            ("P1", 0),
            ("m2", 1),
            ("M2", 2),
            ("m3", 3),
            ("M3", 4),
            ("P4", 5),
            ("A4", 6),
            ("d5", 6),
            ("P5", 7),
            ("A5", 8),
            ("m6", 8),
            ("M6", 9),
            ("d7", 9),
            ("m7", 10),
            ("M7", 11),
            ("P8", 12),
            ("M9", 14),
            ("P15", 24),
        ];
        for (label, semitones) in expected {
            assert_eq!(interval(label).semitones(), semitones, "{}", label);
        }
    }

    #[test]
    fn test_round_trip_label() {
        assert_eq!(interval("m7").to_string(), "m7");
        assert_eq!(interval("P8"), Interval::OCTAVE);
        assert_eq!(interval("P1"), Interval::UNISON);
    }

    #[test]
    fn test_invalid_labels() {
        for bad in ["", "P", "X3", "P3", "M5", "m4", "P0", "M16", "3m"] {
            assert_eq!(
                bad.parse::<Interval>(),
                Err(FretboardError::InvalidInterval(bad.to_string())),
                "{} should be rejected",
                bad
            );
        }
    }
}
