//! CLI tool for merged-header - lays out a JSON header definition
//!
//! Usage:
//!   header_layout <definition.json>              # Output layout JSON to stdout
//!   header_layout <definition.json> -o out.json  # Output layout JSON to file

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use merged_header::{layout_definition, HeaderError, Result};

const USAGE: &str = "Usage: header_layout <definition.json> [-o output.json]";

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl Args {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let input = args.next().ok_or_else(|| HeaderError::from(USAGE))?;
        let output = match (args.next().as_deref(), args.next()) {
            (None, _) => None,
            (Some("-o"), Some(path)) => Some(PathBuf::from(path)),
            _ => return Err(HeaderError::from(USAGE)),
        };
        Ok(Self {
            input: PathBuf::from(input),
            output,
        })
    }
}

fn run(args: Args) -> Result<()> {
    let definition = fs::read_to_string(&args.input)?;
    let report = layout_definition(&definition)?;
    let json = serde_json::to_string_pretty(&report)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &json)?;
            eprintln!(
                "Written: {} ({} levels, {} cells, {}px deep)",
                path.display(),
                report.level_boundaries.len(),
                report.cells.len(),
                report.thickness
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() {
    let result = Args::parse(env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        eprintln!("header_layout: {e}");
        std::process::exit(1);
    }
}
