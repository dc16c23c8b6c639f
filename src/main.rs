use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use fretboard::fretboard::MAX_FRET;
use fretboard::render::{plain, prettify};
use fretboard::tuning::split_tuning;
use fretboard::{
    ChordType, DiagramConfig, FretWindow, Fretboard, FretboardError, Instrument, Labels,
    ScaleType, Selection, ROOT_NOTES,
};

#[derive(Parser)]
#[command(name = "fretboard")]
#[command(about = "Show the notes and intervals of a scale or chord on a fretboard")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Root note, e.g. C, F#, Bb
    root: Option<String>,

    /// Scale or chord type, e.g. major, dorian, dom7
    #[arg(value_name = "TYPE")]
    type_name: Option<String>,

    /// First fret to show
    from: Option<i32>,

    /// Last fret to show
    to: Option<i32>,

    /// Treat TYPE as a chord
    #[arg(long, conflicts_with = "scale")]
    chord: bool,

    /// Treat TYPE as a scale
    #[arg(long)]
    scale: bool,

    /// Tuning low-to-high, e.g. "D2 A2 D3 G3 B3 E4"
    #[arg(short, long)]
    tuning: Option<String>,

    /// Instrument preset (guitar, bass, ukulele, banjo, mandolin)
    #[arg(short, long, conflicts_with = "tuning")]
    instrument: Option<String>,

    /// Labels to print: notes, intervals or both
    #[arg(long)]
    show: Option<String>,

    /// Print ♭ and ♯ instead of b and #
    #[arg(long)]
    unicode: bool,

    /// Print the diagram as JSON
    #[arg(long)]
    json: bool,

    /// YAML diagram configuration; command-line values win
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List chord types, scale types, roots and instruments
    #[arg(long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list {
        print_lists();
        return;
    }

    let config = match resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let diagram = config.build();

    if cli.json {
        match serde_json::to_string_pretty(&diagram) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error writing JSON: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let text = plain(&diagram, config.labels);
    if cli.unicode {
        print!("{}", prettify(&text));
    } else {
        print!("{}", text);
    }
}

/// Start from the config file (if any) and apply command-line overrides
fn resolve(cli: &Cli) -> Result<DiagramConfig, FretboardError> {
    let mut config = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|e| {
                FretboardError::Config(format!("cannot read '{}': {}", path.display(), e))
            })?;
            DiagramConfig::from_yaml(&source)?
        }
        None => DiagramConfig::from_yaml("")?,
    };

    if let Some(tuning) = &cli.tuning {
        config.fretboard = Fretboard::new(&split_tuning(tuning))?;
    } else if let Some(instrument) = &cli.instrument {
        config.fretboard = Fretboard::from_pitches(instrument.parse::<Instrument>()?.tuning())?;
    }

    if cli.root.is_some() || cli.type_name.is_some() || cli.chord || cli.scale {
        // An unusable selection is shown as the default C major, not rejected
        config.selection = match selection(cli) {
            Ok(selection) => Some(selection),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        };
    }

    if let Some(from) = cli.from {
        config.window = Some(FretWindow::sorted(from, cli.to.unwrap_or(MAX_FRET as i32)));
    }

    if let Some(show) = &cli.show {
        config.labels = show.parse::<Labels>()?;
    }

    Ok(config)
}

fn selection(cli: &Cli) -> Result<Selection, FretboardError> {
    let root = cli.root.as_deref().unwrap_or("C");
    let type_name = cli.type_name.as_deref();
    if cli.chord {
        Selection::chord(root, type_name.unwrap_or("maj"))
    } else if cli.scale {
        Selection::scale(root, type_name.unwrap_or("major"))
    } else {
        Selection::parse(root, type_name.unwrap_or("major"))
    }
}

fn print_lists() {
    println!("Scales:      {}", ScaleType::names().join(" "));
    println!("Chords:      {}", ChordType::names().join(" "));
    println!("Roots:       {}", ROOT_NOTES.join(" "));
    let instruments: Vec<&str> = Instrument::ALL.iter().map(|i| i.name()).collect();
    println!("Instruments: {}", instruments.join(" "));
}
