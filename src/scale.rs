//! Scale recipes and spelled scales.

use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;
use crate::interval::Interval;
use crate::pitch::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    MajorPentatonic,
    MinorPentatonic,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ScaleType {
    pub const ALL: [ScaleType; 13] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Ionian,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::NaturalMinor => "natural_minor",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::MajorPentatonic => "major_pentatonic",
            ScaleType::MinorPentatonic => "minor_pentatonic",
            ScaleType::Ionian => "ionian",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Aeolian => "aeolian",
            ScaleType::Locrian => "locrian",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    pub fn recipe(self) -> &'static [&'static str] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &["P1", "M2", "M3", "P4", "P5", "M6", "M7"],
            ScaleType::NaturalMinor | ScaleType::Aeolian => {
                &["P1", "M2", "m3", "P4", "P5", "m6", "m7"]
            }
            ScaleType::HarmonicMinor => &["P1", "M2", "m3", "P4", "P5", "m6", "M7"],
            ScaleType::MelodicMinor => &["P1", "M2", "m3", "P4", "P5", "M6", "M7"],
            ScaleType::MajorPentatonic => &["P1", "M2", "M3", "P5", "M6"],
            ScaleType::MinorPentatonic => &["P1", "m3", "P4", "P5", "m7"],
            ScaleType::Dorian => &["P1", "M2", "m3", "P4", "P5", "M6", "m7"],
            ScaleType::Phrygian => &["P1", "m2", "m3", "P4", "P5", "m6", "m7"],
            ScaleType::Lydian => &["P1", "M2", "M3", "A4", "P5", "M6", "M7"],
            ScaleType::Mixolydian => &["P1", "M2", "M3", "P4", "P5", "M6", "m7"],
            ScaleType::Locrian => &["P1", "m2", "m3", "P4", "d5", "m6", "m7"],
        }
    }

    pub fn intervals(self) -> Vec<Interval> {
        self.recipe()
            .iter()
            .map(|label| {
                label
                    .parse()
                    .unwrap_or_else(|_| unreachable!("bad interval '{}' in scale recipe", label))
            })
            .collect()
    }

    /// Anything containing "major" and `ionian` go to `natural_minor`,
    /// everything else to `major`
    pub fn toggled_quality(self) -> ScaleType {
        if self.name().contains("major") || self == ScaleType::Ionian {
            ScaleType::NaturalMinor
        } else {
            ScaleType::Major
        }
    }

    pub fn is_minor(self) -> bool {
        self.name().contains("minor") || self == ScaleType::Aeolian
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleType {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == trimmed)
            .ok_or_else(|| FretboardError::UnknownScaleType(trimmed.to_string()))
    }
}

/// A scale spelled from its root.
///
/// `scale_type` is `None` for scales built from an arbitrary interval list
/// with [`Scale::custom`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: Note,
    scale_type: Option<ScaleType>,
    notes: Vec<Note>,
    intervals: Vec<Interval>,
}

impl Scale {
    pub fn new(root: Note, scale_type: ScaleType) -> Result<Self, FretboardError> {
        let mut scale = Self::custom(root, &scale_type.intervals())?;
        scale.scale_type = Some(scale_type);
        Ok(scale)
    }

    /// Spell a scale from any list of intervals, in the given order.
    ///
    /// ```rust
    /// use fretboard::Scale;
    ///
    /// let blues_notes = ["P1", "m3", "P4", "d5", "P5", "m7"]
    ///     .iter()
    ///     .map(|label| label.parse())
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// let blues = Scale::custom("A".parse()?, &blues_notes)?;
    /// assert_eq!(blues.notes()[3].to_string(), "Eb");
    /// # Ok::<(), fretboard::FretboardError>(())
    /// ```
    pub fn custom(root: Note, intervals: &[Interval]) -> Result<Self, FretboardError> {
        let notes = intervals
            .iter()
            .map(|interval| root.transpose(*interval))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            root,
            scale_type: None,
            notes,
            intervals: intervals.to_vec(),
        })
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn scale_type(&self) -> Option<ScaleType> {
        self.scale_type
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Name used in titles, with underscores shown as spaces
    pub fn display_name(&self) -> String {
        match self.scale_type {
            Some(scale_type) => scale_type.name().replace('_', " "),
            None => "custom".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(root: &str, scale_type: ScaleType) -> Vec<String> {
        Scale::new(root.parse().unwrap(), scale_type)
            .unwrap()
            .notes()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_c_major() {
        assert_eq!(spelled("C", ScaleType::Major), vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_sharp_and_flat_keys() {
        assert_eq!(
            spelled("F#", ScaleType::Major),
            vec!["F#", "G#", "A#", "B", "C#", "D#", "E#"]
        );
        assert_eq!(
            spelled("Db", ScaleType::Locrian),
            vec!["Db", "Ebb", "Fb", "Gb", "Abb", "Bbb", "Cb"]
        );
        assert_eq!(spelled("A", ScaleType::MinorPentatonic), vec!["A", "C", "D", "E", "G"]);
    }

    #[test]
    fn test_selectable_roots_spell_every_scale() {
        for root in crate::pitch::ROOT_NOTES {
            for scale_type in ScaleType::ALL {
                assert!(
                    Scale::new(root.parse().unwrap(), scale_type).is_ok(),
                    "{} {}",
                    root,
                    scale_type
                );
            }
        }
    }

    #[test]
    fn test_modes_share_recipes() {
        assert_eq!(ScaleType::Ionian.recipe(), ScaleType::Major.recipe());
        assert_eq!(ScaleType::Aeolian.recipe(), ScaleType::NaturalMinor.recipe());
    }

    #[test]
    fn test_names() {
        assert_eq!("harmonic_minor".parse::<ScaleType>().unwrap(), ScaleType::HarmonicMinor);
        assert!("maj".parse::<ScaleType>().is_err());
        let scale = Scale::new("C".parse().unwrap(), ScaleType::NaturalMinor).unwrap();
        assert_eq!(scale.display_name(), "natural minor");
    }

    #[test]
    fn test_minor_detection() {
        assert!(ScaleType::MelodicMinor.is_minor());
        assert!(ScaleType::Aeolian.is_minor());
        assert!(!ScaleType::Dorian.is_minor());
        assert_eq!(ScaleType::Ionian.toggled_quality(), ScaleType::NaturalMinor);
        assert_eq!(ScaleType::Dorian.toggled_quality(), ScaleType::Major);
        assert_eq!(
            ScaleType::MajorPentatonic.toggled_quality(),
            ScaleType::NaturalMinor
        );
        assert_eq!(ScaleType::MinorPentatonic.toggled_quality(), ScaleType::Major);
    }
}
