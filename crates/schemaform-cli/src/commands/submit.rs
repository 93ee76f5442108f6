//! Submit command - validates field values and exports the result record.

use std::path::PathBuf;

use anyhow::Context;
use nu_ansi_term::Color;
use schemaform::export;
use schemaform::{FieldValues, FormSchema, ValidationState, submit};

use crate::util::{input_arg, load_schema, read_input, output_path, write_output};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the schema document
    pub schema: String,

    /// Path to a JSON object of field id to value (use - for stdin)
    pub values: String,

    /// Write the record to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the record to form-submission.json
    #[arg(long, conflicts_with = "output")]
    pub download: bool,

    /// Compact JSON output
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)?;
    let values_source = read_input(input_arg(&args.values))?;
    let values: FieldValues =
        serde_json::from_str(&values_source).context("Values must be a JSON object of strings")?;

    let record = match submit(&schema, &values) {
        Ok(record) => record,
        Err(state) => {
            print_rejection(&schema, &state);
            std::process::exit(1);
        }
    };

    let config = export::Config {
        pretty: !args.compact,
        ..Default::default()
    };
    let artifact = export::export(&record, &config)?;
    let output = output_path(args.output.as_deref(), args.download, &artifact);
    write_output(output.as_deref(), &artifact.contents)?;

    if let Some(path) = output {
        eprintln!(
            "{} wrote {}",
            Color::Green.bold().paint("✓"),
            path.display()
        );
    }
    Ok(())
}

pub fn print_rejection(schema: &FormSchema, state: &ValidationState) {
    for (id, message) in state.errors() {
        let label = schema.field(id).map_or(id, |field| field.label.as_str());
        eprintln!("  {} {label}: {message}", Color::Red.paint("✗"));
    }
    eprintln!(
        "{} submission rejected: {} error(s)",
        Color::Red.bold().paint("✗"),
        state.error_count()
    );
}
