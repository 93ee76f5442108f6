use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use schemaform::export::ExportedRecord;
use schemaform::report::format_schema_error;
use schemaform::{FormSchema, SchemaError, parse_schema};

/// Map the `-` convention to `None` (stdin).
pub fn input_arg(file: &str) -> Option<&str> {
    if file == "-" { None } else { Some(file) }
}

/// Read input from file path or stdin.
/// - `None` or `Some("-")` reads from stdin
/// - `Some(path)` reads from file
pub fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Error reading from stdin")?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Error reading {path}")),
    }
}

/// Helper to get display path for error messages
pub fn display_path(file: Option<&str>) -> &str {
    file.unwrap_or("<stdin>")
}

/// Read and validate a schema document.
///
/// An invalid document is reported as an annotated snippet and ends the
/// process with status 1.
pub fn load_schema(file: &str) -> anyhow::Result<FormSchema> {
    let file_opt = input_arg(file);
    let source = read_input(file_opt)?;
    match parse_schema(&source) {
        Ok(schema) => Ok(schema),
        Err(e) => handle_schema_error(&e, &source, display_path(file_opt)),
    }
}

pub fn handle_schema_error(error: &SchemaError, source: &str, path: &str) -> ! {
    eprintln!("{}", format_schema_error(error, source, path, true));
    std::process::exit(1);
}

/// Destination for an exported record.
///
/// `--download` saves under the artifact's own file name; otherwise `output`
/// is used as given, and `None` means stdout.
pub fn output_path(
    output: Option<&Path>,
    download: bool,
    artifact: &ExportedRecord,
) -> Option<PathBuf> {
    match (output, download) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(PathBuf::from(&artifact.file_name)),
        (None, false) => None,
    }
}

/// Write to `output`, or to stdout when absent.
pub fn write_output(output: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("Error writing {}", path.display())),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}
