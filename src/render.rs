//! # Plain-Text Rendering
//!
//! Console output of a [`Diagram`], one block per label kind:
//!
//! ```text
//! C major scale: C D E F G A B
//!   E    F         G         A         B    C  ...
//!   B    C         D         E    F         G  ...
//!   N    1    2    3    4    5    6    7    8  ...
//! ```
//!
//! Every cell is centred in five columns. The fret-number line marks the
//! nut (fret 0) with `N`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FretboardError;
use crate::fretboard::Diagram;

const CELL_WIDTH: usize = 5;

/// Which grid(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Labels {
    Notes,
    Intervals,
    #[default]
    Both,
}

impl FromStr for Labels {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "notes" => Ok(Labels::Notes),
            "intervals" => Ok(Labels::Intervals),
            "both" => Ok(Labels::Both),
            other => Err(FretboardError::Config(format!(
                "show must be notes, intervals or both, not '{}'",
                other
            ))),
        }
    }
}

/// Replace ASCII accidentals with ♭ and ♯.
///
/// Only lower-case `b` is an accidental, so note letters are left alone.
///
/// ```rust
/// assert_eq!(fretboard::render::prettify("Bb F# Ebb"), "B♭ F♯ E♭♭");
/// ```
pub fn prettify(text: &str) -> String {
    text.replace('b', "♭").replace('#', "♯")
}

/// Render `diagram` as plain text
pub fn plain(diagram: &Diagram, labels: Labels) -> String {
    let mut out = String::new();
    match labels {
        Labels::Notes => block(&mut out, diagram, &diagram.notes),
        Labels::Intervals => block(&mut out, diagram, &diagram.intervals),
        Labels::Both => {
            block(&mut out, diagram, &diagram.notes);
            block(&mut out, diagram, &diagram.intervals);
        }
    }
    out
}

fn block(out: &mut String, diagram: &Diagram, grid: &[Vec<String>]) {
    out.push_str(&diagram.title);
    out.push('\n');
    for row in grid {
        for cell in row {
            out.push_str(&centre(cell));
        }
        out.push('\n');
    }
    for fret in diagram.frets() {
        let label = if fret == 0 { "N".to_string() } else { fret.to_string() };
        out.push_str(&centre(&label));
    }
    out.push_str("\n\n");
}

/// Centre in `CELL_WIDTH` columns, extra padding on the right
fn centre(text: &str) -> String {
    let len = text.chars().count();
    if len >= CELL_WIDTH {
        return text.to_string();
    }
    let left = (CELL_WIDTH - len) / 2;
    let right = CELL_WIDTH - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&plain(self, Labels::Both))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FretWindow, Fretboard, Selection};

    fn small_diagram() -> Diagram {
        let board = Fretboard::new(&["G3", "B3"]).unwrap();
        let selection = Selection::chord("G", "maj").unwrap();
        board.build(Some(&selection), Some(FretWindow::new(0, 3)))
    }

    #[test]
    fn test_centre() {
        assert_eq!(centre(""), "     ");
        assert_eq!(centre("E"), "  E  ");
        assert_eq!(centre("Bb"), " Bb  ");
        assert_eq!(centre("P1/d2"), "P1/d2");
    }

    #[test]
    fn test_plain_notes() {
        let text = plain(&small_diagram(), Labels::Notes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "G major chord: G B D");
        assert_eq!(lines[1], format!("  B  {}  D  ", " ".repeat(10)));
        assert_eq!(lines[2], format!("  G  {}", " ".repeat(15)));
        assert_eq!(lines[3], "  N    1    2    3  ");
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_plain_both() {
        let text = plain(&small_diagram(), Labels::Both);
        assert_eq!(text.matches("G major chord").count(), 2);
        assert!(text.contains(" M3  "));
        assert_eq!(small_diagram().to_string(), text);
    }

    #[test]
    fn test_fret_numbers_follow_window() {
        let board = Fretboard::standard();
        let diagram = board.build(None, Some(FretWindow::new(10, 12)));
        let text = plain(&diagram, Labels::Intervals);
        assert!(text.contains(" 10   11   12  "));
        assert!(!text.contains(" N "));
    }

    #[test]
    fn test_labels_from_str() {
        assert_eq!("intervals".parse::<Labels>().unwrap(), Labels::Intervals);
        assert!("colours".parse::<Labels>().is_err());
    }
}
