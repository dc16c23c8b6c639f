//! Integration tests for the fretboard library
//!
//! Tests the full pipeline from tuning and selection names to diagrams,
//! rendered text and JSON.

use fretboard::render::{plain, prettify};
use fretboard::{
    diagram, diagram_from_yaml, BuildWarning, FretWindow, Fretboard, FretboardError, Labels,
    Selection,
};

const STANDARD: [&str; 6] = ["E2", "A2", "D3", "G3", "B3", "E4"];

#[test]
fn test_c_major_scale_first_frets() {
    let result = diagram(&STANDARD, "C", "major", Some(FretWindow::new(0, 3)));
    assert!(result.is_ok(), "Should lay out C major on standard tuning");
    let diagram = result.unwrap();

    assert_eq!(diagram.title, "C major scale: C D E F G A B");
    assert_eq!(diagram.tuning, vec!["E", "B", "G", "D", "A", "E"]);
    assert_eq!(diagram.notes[0], vec!["E", "F", "", "G"]);
    assert_eq!(diagram.intervals[0], vec!["M3", "P4", "", "P5"]);
    assert_eq!(diagram.midi[0], vec![64, 65, 66, 67]);
    assert_eq!(diagram.midi[5], vec![40, 41, 42, 43]);
    assert!(diagram.warnings.is_empty());
}

#[test]
fn test_chord_type_fallback_in_parse() {
    // "dom7" is not a scale, so it resolves as a chord
    let diagram = diagram(&STANDARD, "G", "dom7", None).unwrap();
    assert_eq!(diagram.title, "G dom7 chord: G B D F");
    assert_eq!(diagram.notes[5][3], "G");
    assert_eq!(diagram.intervals[5][3], "P1");
    assert_eq!(diagram.notes[5][1], "F");
    assert_eq!(diagram.intervals[5][1], "m7");
}

#[test]
fn test_c_major_chord_on_low_e_string() {
    let board = Fretboard::new(&STANDARD).unwrap();
    let chord = Selection::chord("C", "maj").unwrap();
    let diagram = board.build(Some(&chord), Some(FretWindow::new(0, 12)));

    let low_e = &diagram.notes[5];
    let placed: Vec<(usize, &str)> = low_e
        .iter()
        .enumerate()
        .filter(|(_, note)| !note.is_empty())
        .map(|(fret, note)| (fret, note.as_str()))
        .collect();
    assert_eq!(placed, vec![(0, "E"), (3, "G"), (8, "C"), (12, "E")]);
}

#[test]
fn test_inverted_window_falls_back_to_full_neck() {
    let board = Fretboard::standard();
    let diagram = board.build(
        Some(&Selection::scale("C", "major").unwrap()),
        Some(FretWindow::new(5, 3)),
    );
    assert_eq!(diagram.window, FretWindow::FULL);
    assert!(diagram.notes.iter().all(|row| row.len() == 25));
    assert_eq!(
        diagram.warnings,
        vec![BuildWarning::FretWindowReset { from: 5, to: 3 }]
    );
}

#[test]
fn test_unresolvable_tuning_entry() {
    let result = diagram(&["E2", "A2", "D3", "G3", "B3", "H2"], "C", "major", None);
    assert_eq!(
        result,
        Err(FretboardError::UnresolvablePitch {
            input: "H2".to_string()
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Unresolvable pitch: 'H2'"
    );
}

#[test]
fn test_unknown_type_name() {
    let result = diagram(&STANDARD, "C", "bebop", None);
    assert!(matches!(result, Err(FretboardError::UnknownScaleType(_))));
}

#[test]
fn test_diagram_from_yaml() {
    let source = r#"
instrument: banjo
root: G
chord: maj
frets: [0, 5]
"#;
    let diagram = diagram_from_yaml(source).unwrap();
    assert_eq!(diagram.string_count(), 5);
    assert_eq!(diagram.tuning, vec!["D", "B", "G", "D", "G"]);
    // Open G tuning: every open string is a chord tone
    for row in &diagram.intervals {
        assert!(!row[0].is_empty());
    }
    assert_eq!(diagram.intervals[4][0], "P1");
}

#[test]
fn test_json_shape() {
    let board = Fretboard::new(&["G3", "B3"]).unwrap();
    let diagram = board.build(None, Some(FretWindow::new(3, 1)));
    let json: serde_json::Value = serde_json::to_value(&diagram).unwrap();

    assert_eq!(json["tuning"], serde_json::json!(["B", "G"]));
    assert_eq!(json["title"], "C major scale: C D E F G A B");
    assert_eq!(json["window"], serde_json::json!({ "from": 0, "to": 24 }));
    assert_eq!(json["notes"][0][0], "B");
    assert_eq!(json["intervals"][0][1], "P1");
    assert_eq!(json["midi"][1][0], 55);
    assert_eq!(
        json["warnings"],
        serde_json::json!([
            { "kind": "defaultSelection" },
            { "kind": "fretWindowReset", "from": 3, "to": 1 }
        ])
    );
    assert!(json.get("selection").is_none());
}

#[test]
fn test_rendered_output() {
    let diagram = diagram(&STANDARD, "Bb", "major", Some(FretWindow::new(0, 5))).unwrap();
    let text = plain(&diagram, Labels::Notes);
    assert!(text.starts_with("Bb major scale: Bb C D Eb F G A\n"));
    // Title plus six strings plus the fret line
    assert_eq!(text.lines().filter(|line| !line.is_empty()).count(), 8);
    assert!(prettify(&text).starts_with("B♭ major scale: B♭ C D E♭ F G A"));
}
