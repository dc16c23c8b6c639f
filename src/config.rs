//! # Diagram Configuration
//!
//! Describe a diagram in YAML instead of on the command line.
//!
//! ## Keys
//! All keys are optional and kebab-case:
//!
//! ```yaml
//! instrument: guitar        # guitar, bass, ukulele, banjo, mandolin
//! tuning: [D2, A2, D3, G3, B3, E4]   # wins over instrument
//! root: D
//! scale: major              # or chord: maj (not both)
//! frets: [0, 12]
//! show: intervals           # notes, intervals or both
//! ```
//!
//! A missing `root` defaults to C. A missing `scale` and `chord` leaves the
//! selection empty, and the engine falls back to C major with a warning.
//!
//! ## Example
//! ```rust
//! use fretboard::config::DiagramConfig;
//!
//! let config = DiagramConfig::from_yaml("instrument: ukulele\nroot: F\nchord: maj7\n")?;
//! let diagram = config.build();
//! assert_eq!(diagram.string_count(), 4);
//! assert_eq!(diagram.title, "F maj7 chord: F A C E");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::Deserialize;

use crate::error::FretboardError;
use crate::fretboard::{Diagram, FretWindow, Fretboard};
use crate::render::Labels;
use crate::selection::Selection;
use crate::tuning::{parse_tuning, Instrument};

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub instrument: Option<Instrument>,
    pub tuning: Option<Vec<String>>,
    pub root: Option<String>,
    pub scale: Option<String>,
    pub chord: Option<String>,
    pub frets: Option<Vec<i32>>,
    pub show: Option<Labels>,
}

/// A resolved diagram configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    pub fretboard: Fretboard,
    pub selection: Option<Selection>,
    pub window: Option<FretWindow>,
    pub labels: Labels,
}

impl DiagramConfig {
    pub fn from_yaml(source: &str) -> Result<Self, FretboardError> {
        let raw: RawConfig = if source.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| FretboardError::Config(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, FretboardError> {
        let fretboard = match (raw.tuning, raw.instrument) {
            (Some(tuning), _) => Fretboard::from_pitches(parse_tuning(&tuning)?)?,
            (None, Some(instrument)) => Fretboard::from_pitches(instrument.tuning())?,
            (None, None) => Fretboard::standard(),
        };

        let root = raw.root.as_deref().unwrap_or("C");
        let selection = match (raw.scale, raw.chord) {
            (Some(_), Some(_)) => {
                return Err(FretboardError::Config(
                    "specify either scale or chord, not both".to_string(),
                ))
            }
            (Some(scale), None) => Some(Selection::scale(root, &scale)?),
            (None, Some(chord)) => Some(Selection::chord(root, &chord)?),
            (None, None) => None,
        };

        let window = match raw.frets.as_deref() {
            None => None,
            Some([from, to]) => Some(FretWindow::new(*from, *to)),
            Some(other) => {
                return Err(FretboardError::Config(format!(
                    "frets must list exactly two frets, got {}",
                    other.len()
                )))
            }
        };

        Ok(Self {
            fretboard,
            selection,
            window,
            labels: raw.show.unwrap_or_default(),
        })
    }

    pub fn build(&self) -> Diagram {
        self.fretboard.build(self.selection.as_ref(), self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::BuildWarning;

    #[test]
    fn test_full_config() {
        let source = r#"
tuning: [D2, A2, D3, G3, B3, E4]
root: D
scale: major
frets: [0, 12]
show: intervals
"#;
        let config = DiagramConfig::from_yaml(source).unwrap();
        assert_eq!(config.fretboard.tuning()[5].to_string(), "D2");
        assert_eq!(config.selection, Some(Selection::scale("D", "major").unwrap()));
        assert_eq!(config.window, Some(FretWindow::new(0, 12)));
        assert_eq!(config.labels, Labels::Intervals);

        let diagram = config.build();
        assert_eq!(diagram.notes[5][0], "D");
        assert_eq!(diagram.intervals[5][0], "P1");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DiagramConfig::from_yaml("").unwrap();
        assert_eq!(config.fretboard, Fretboard::standard());
        assert_eq!(config.selection, None);
        assert_eq!(config.labels, Labels::Both);
        assert_eq!(config.build().warnings, vec![BuildWarning::DefaultSelection]);
    }

    #[test]
    fn test_instrument_preset() {
        let config = DiagramConfig::from_yaml("instrument: bass\nchord: open5\nroot: A").unwrap();
        assert_eq!(config.fretboard.string_count(), 4);
    }

    #[test]
    fn test_conflicting_selection() {
        let err = DiagramConfig::from_yaml("scale: major\nchord: maj").unwrap_err();
        assert_eq!(
            err,
            FretboardError::Config("specify either scale or chord, not both".to_string())
        );
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            DiagramConfig::from_yaml("frets: [1, 2, 3]"),
            Err(FretboardError::Config(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("tuning: [E2, H2]"),
            Err(FretboardError::UnresolvablePitch { .. })
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("instrument: lute"),
            Err(FretboardError::Config(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("colour: red"),
            Err(FretboardError::Config(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("chord: seventh"),
            Err(FretboardError::UnknownChordType(_))
        ));
    }
}
