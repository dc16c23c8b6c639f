//! Fretboard construction and the note-layout algorithm.

use crate::enharmonic::{self, GROUP_COUNT};
use crate::error::FretboardError;
use crate::pitch::Pitch;
use crate::selection::{Placement, Selection};
use crate::tuning::{parse_tuning, Instrument};

use super::types::{BuildWarning, Diagram, FretWindow, Grid};

/// Highest fret on the neck
pub const MAX_FRET: usize = 24;

/// Open string plus frets 1 through 24
pub const FRET_POSITIONS: usize = MAX_FRET + 1;

/// Enharmonic group index for each fret of one string
pub type Lane = [usize; FRET_POSITIONS];

/// One string: its open pitch and its chromatic lane
#[derive(Debug, Clone, PartialEq)]
struct TunedString {
    open: Pitch,
    lane: Lane,
}

impl TunedString {
    fn new(open: Pitch) -> Self {
        let start = enharmonic::group_of(&open.note());
        let mut lane = [0; FRET_POSITIONS];
        for (fret, group) in lane.iter_mut().enumerate() {
            *group = (start + fret) % GROUP_COUNT;
        }
        Self { open, lane }
    }

    fn midi_row(&self) -> Vec<u8> {
        let open = self.open.midi_number();
        (0..FRET_POSITIONS as u8).map(|fret| open + fret).collect()
    }

    /// Note and interval labels for every fret of this string
    fn label_rows(&self, placements: &[Placement]) -> (Vec<String>, Vec<String>) {
        let mut notes = Vec::with_capacity(FRET_POSITIONS);
        let mut intervals = Vec::with_capacity(FRET_POSITIONS);

        for group_index in self.lane {
            let group = &enharmonic::ENHARMONICS[group_index];
            let matches: Vec<&Placement> = placements
                .iter()
                .filter(|p| group.contains_note(&p.note))
                .collect();

            notes.push(join_matches(&matches, |p| p.note.to_string()));
            intervals.push(join_matches(&matches, |p| p.interval.to_string()));
        }
        (notes, intervals)
    }
}

/// Several notes of one selection landing on the same fret are joined with `/`
fn join_matches(matches: &[&Placement], label: impl Fn(&Placement) -> String) -> String {
    matches.iter().map(|p| label(*p)).collect::<Vec<_>>().join("/")
}

/// A tuned instrument, ready to lay out chords and scales.
///
/// Strings are stored highest first. Construction is the only place the
/// tuning is read; [`Fretboard::build`] never changes the instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Fretboard {
    strings: Vec<TunedString>,
}

impl Fretboard {
    /// Tune a fretboard from pitch names given low-to-high.
    ///
    /// # Errors
    /// - [`FretboardError::EmptyTuning`] for an empty list
    /// - [`FretboardError::UnresolvablePitch`] for an entry that names no note
    pub fn new<S: AsRef<str>>(tuning: &[S]) -> Result<Self, FretboardError> {
        Self::from_pitches(parse_tuning(tuning)?)
    }

    /// Tune a fretboard from parsed pitches given low-to-high.
    ///
    /// # Errors
    /// - [`FretboardError::EmptyTuning`] for an empty list
    pub fn from_pitches(tuning: Vec<Pitch>) -> Result<Self, FretboardError> {
        if tuning.is_empty() {
            return Err(FretboardError::EmptyTuning);
        }
        let strings: Vec<TunedString> = tuning.into_iter().rev().map(TunedString::new).collect();
        let names: Vec<String> = strings.iter().map(|s| s.open.to_string()).collect();
        tracing::debug!(strings = strings.len(), tuning = %names.join(" "), "tuned fretboard");
        Ok(Self { strings })
    }

    /// Standard six-string guitar, E2 A2 D3 G3 B3 E4
    pub fn standard() -> Self {
        match Self::from_pitches(Instrument::Guitar.tuning()) {
            Ok(fretboard) => fretboard,
            Err(e) => unreachable!("guitar preset must tune: {}", e),
        }
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Open-string pitches, highest string first
    pub fn tuning(&self) -> Vec<Pitch> {
        self.strings.iter().map(|s| s.open).collect()
    }

    /// Chromatic lane of string `index` (0 = highest string)
    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.strings.get(index).map(|s| &s.lane)
    }

    /// Lay out `selection` over the fret `window`.
    ///
    /// # Pipeline
    /// 1. Collect the selection's note/interval pairs (chords lose their octave)
    /// 2. Validate the window, falling back to the whole neck
    /// 3. Number every fret with its MIDI note
    /// 4. Label every fret whose enharmonic group contains a selected note
    /// 5. Slice all three grids to the window
    ///
    /// Missing selections and bad windows are corrected, never rejected; the
    /// corrections are listed in [`Diagram::warnings`].
    pub fn build(&self, selection: Option<&Selection>, window: Option<FretWindow>) -> Diagram {
        let mut warnings = Vec::new();

        let selection = match selection {
            Some(selection) => selection.clone(),
            None => {
                warnings.push(BuildWarning::DefaultSelection);
                Selection::default()
            }
        };
        let placements = selection.placements();

        let requested = window.unwrap_or_default();
        let window = if requested.is_valid() {
            requested
        } else {
            warnings.push(BuildWarning::FretWindowReset {
                from: requested.from,
                to: requested.to,
            });
            FretWindow::FULL
        };

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let midi: Grid<u8> = self.strings.iter().map(TunedString::midi_row).collect();

        let mut notes: Grid<String> = Vec::with_capacity(self.strings.len());
        let mut intervals: Grid<String> = Vec::with_capacity(self.strings.len());
        for string in &self.strings {
            let (note_row, interval_row) = string.label_rows(&placements);
            notes.push(note_row);
            intervals.push(interval_row);
        }

        Diagram {
            tuning: self.strings.iter().map(|s| s.open.note().to_string()).collect(),
            title: selection.title(),
            window,
            notes: slice(notes, window),
            intervals: slice(intervals, window),
            midi: slice(midi, window),
            warnings,
            selection,
        }
    }
}

/// Keep only the window's columns of every row
fn slice<T>(grid: Grid<T>, window: FretWindow) -> Grid<T> {
    if window == FretWindow::FULL {
        return grid;
    }
    let skip = window.from as usize;
    grid.into_iter()
        .map(|row| row.into_iter().skip(skip).take(window.width()).collect())
        .collect()
}
