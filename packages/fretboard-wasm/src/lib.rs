use fretboard::enharmonic::root_spelling;
use fretboard::tuning::split_tuning;
use fretboard::{
    ChordType, FretWindow, Fretboard, FretboardError, Instrument, ScaleType, Selection, ROOT_NOTES,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A selection as the picker shows it
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SelectionInfo {
    root: String,
    kind: &'static str,
    type_name: &'static str,
    title: String,
}

impl From<&Selection> for SelectionInfo {
    fn from(selection: &Selection) -> Self {
        Self {
            root: selection.root().to_string(),
            kind: selection.kind(),
            type_name: selection.type_name(),
            title: selection.title(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct BuildError {
    message: String,
    kind: &'static str,
}

fn error_kind(e: &FretboardError) -> &'static str {
    match e {
        FretboardError::UnresolvablePitch { .. } => "unresolvablePitch",
        FretboardError::EmptyTuning => "emptyTuning",
        FretboardError::InvalidInterval(_) => "invalidInterval",
        FretboardError::UnknownChordType(_) => "unknownChordType",
        FretboardError::UnknownScaleType(_) => "unknownScaleType",
        FretboardError::UnspellableNote { .. } => "unspellableNote",
        FretboardError::Config(_) => "config",
    }
}

fn to_build_error(e: FretboardError) -> BuildError {
    BuildError {
        message: e.to_string(),
        kind: error_kind(&e),
    }
}

fn to_js_error(e: FretboardError) -> JsValue {
    let json = serde_json::to_string(&to_build_error(e))
        .unwrap_or_else(|_| r#"{"message":"unknown error","kind":"internal"}"#.to_string());
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Blank input means a guitar, an instrument name picks its preset,
/// anything else is a low-to-high list of pitches.
fn fretboard_for(tuning: &str) -> Result<Fretboard, FretboardError> {
    let tuning = tuning.trim();
    if tuning.is_empty() {
        return Ok(Fretboard::standard());
    }
    if let Ok(instrument) = tuning.parse::<Instrument>() {
        return Fretboard::from_pitches(instrument.tuning());
    }
    Fretboard::new(&split_tuning(tuning))
}

fn selection_for(root: &str, kind: &str, type_name: &str) -> Result<Selection, FretboardError> {
    match kind {
        "chord" => Selection::chord(root, type_name),
        "scale" => Selection::scale(root, type_name),
        _ => Selection::parse(root, type_name),
    }
}

fn build(
    tuning: &str,
    root: &str,
    kind: &str,
    type_name: &str,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<String, FretboardError> {
    let fretboard = fretboard_for(tuning)?;
    let selection = selection_for(root, kind, type_name)?;
    let window = match (from, to) {
        (Some(from), Some(to)) => Some(FretWindow::new(from, to)),
        _ => None,
    };
    Ok(to_json(&fretboard.build(Some(&selection), window)))
}

/// Build a fretboard diagram and return it as JSON.
///
/// `kind` is `"chord"`, `"scale"` or empty to try scale names first.
/// Errors are JSON objects `{message, kind}`.
#[wasm_bindgen]
pub fn build_fretboard(
    tuning: &str,
    root: &str,
    kind: &str,
    type_name: &str,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<String, JsValue> {
    build(tuning, root, kind, type_name, from, to).map_err(to_js_error)
}

/// Build a fretboard diagram from a YAML configuration
#[wasm_bindgen]
pub fn build_from_config(source: &str) -> Result<String, JsValue> {
    fretboard::diagram_from_yaml(source)
        .map(|diagram| to_json(&diagram))
        .map_err(to_js_error)
}

/// Flip the selection between its major and minor flavour.
///
/// Returns the new selection as JSON `{root, kind, typeName, title}`.
#[wasm_bindgen]
pub fn toggle_major_minor(root: &str, kind: &str, type_name: &str) -> Result<String, JsValue> {
    selection_for(root, kind, type_name)
        .and_then(|selection| selection.toggle_major_minor())
        .map(|next| to_json(&SelectionInfo::from(&next)))
        .map_err(to_js_error)
}

/// Switch between chord and scale on the same root
#[wasm_bindgen]
pub fn switch_kind(root: &str, kind: &str, type_name: &str) -> Result<String, JsValue> {
    selection_for(root, kind, type_name)
        .and_then(|selection| selection.switch_kind())
        .map(|next| to_json(&SelectionInfo::from(&next)))
        .map_err(to_js_error)
}

/// Root note to select when a fretboard label is clicked.
///
/// Joined labels (`C/Dbb`) use their first note; empty cells give `None`.
#[wasm_bindgen]
pub fn root_for_label(label: &str) -> Option<String> {
    let first = label.split('/').next()?.trim();
    root_spelling(first).map(str::to_string)
}

#[wasm_bindgen]
pub fn list_chord_types() -> String {
    to_json(&ChordType::names())
}

#[wasm_bindgen]
pub fn list_scale_types() -> String {
    to_json(&ScaleType::names())
}

#[wasm_bindgen]
pub fn list_instruments() -> String {
    let names: Vec<&str> = Instrument::ALL.iter().map(|i| i.name()).collect();
    to_json(&names)
}

#[wasm_bindgen]
pub fn root_notes() -> String {
    to_json(&ROOT_NOTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_json() {
        let json = build("", "A", "", "minor_pentatonic", Some(5), Some(8)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "A minor pentatonic scale: A C D E G");
        assert_eq!(value["window"]["from"], 5);
        assert_eq!(value["notes"][5][0], "A");
    }

    #[test]
    fn test_instrument_name_as_tuning() {
        let json = build("ukulele", "C", "chord", "maj", None, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tuning"], serde_json::json!(["A", "E", "C", "G"]));
    }

    #[test]
    fn test_error_shape() {
        let err = build("E2 H2", "C", "", "major", None, None).unwrap_err();
        assert_eq!(
            to_build_error(err),
            BuildError {
                message: "Unresolvable pitch: 'H2'".to_string(),
                kind: "unresolvablePitch",
            }
        );

        let err = build("", "C", "chord", "major", None, None).unwrap_err();
        assert_eq!(error_kind(&err), "unknownChordType");
    }

    #[test]
    fn test_toggle_and_switch() {
        let json = toggle_major_minor("C", "scale", "major_pentatonic").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "root": "C",
                "kind": "scale",
                "typeName": "natural_minor",
                "title": "C natural minor scale: C D Eb F G Ab Bb",
            })
        );

        let json = switch_kind("A", "", "natural_minor").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "chord");
        assert_eq!(value["typeName"], "min");

        let json = switch_kind("G", "chord", "dom7").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["typeName"], "major");
    }

    #[test]
    fn test_root_for_label() {
        assert_eq!(root_for_label("E#"), Some("F".to_string()));
        assert_eq!(root_for_label("Db"), Some("Db".to_string()));
        assert_eq!(root_for_label("C/Dbb"), Some("C".to_string()));
        assert_eq!(root_for_label(""), None);
    }

    #[test]
    fn test_lists() {
        assert!(list_chord_types().contains("\"m7dim5\""));
        assert!(list_scale_types().contains("\"locrian\""));
        assert!(list_instruments().starts_with("[\"guitar\""));
        assert!(root_notes().contains("\"F#\""));
    }
}
