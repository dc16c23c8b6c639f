pub mod chord;
pub mod config;
pub mod enharmonic;
pub mod error;
pub mod fretboard;
pub mod interval;
pub mod pitch;
pub mod render;
pub mod scale;
pub mod selection;
pub mod tuning;

pub use chord::{Chord, ChordType};
pub use config::DiagramConfig;
pub use error::*;
pub use fretboard::{BuildWarning, Diagram, FretWindow, Fretboard, Grid, Lane};
pub use interval::{Interval, Quality};
pub use pitch::{Letter, Note, Pitch, ROOT_NOTES};
pub use render::Labels;
pub use scale::{Scale, ScaleType};
pub use selection::{Placement, Selection};
pub use tuning::Instrument;

/// Lay out a chord or scale on a tuning given low-to-high.
/// This is the main entry point for the library.
///
/// `type_name` is tried as a scale type first, then as a chord type.
pub fn diagram<S: AsRef<str>>(
    tuning: &[S],
    root: &str,
    type_name: &str,
    window: Option<FretWindow>,
) -> Result<Diagram, FretboardError> {
    let fretboard = Fretboard::new(tuning)?;
    let selection = Selection::parse(root, type_name)?;
    Ok(fretboard.build(Some(&selection), window))
}

/// Lay out a diagram described by a YAML configuration
pub fn diagram_from_yaml(source: &str) -> Result<Diagram, FretboardError> {
    Ok(DiagramConfig::from_yaml(source)?.build())
}
