//! Check command - validates a form schema document.

use nu_ansi_term::Color;

use crate::util::{display_path, input_arg, load_schema};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the schema document (use - for stdin)
    pub file: String,

    /// Quiet mode: print nothing on success
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let schema = load_schema(&args.file)?;
    if !args.quiet {
        println!(
            "{} {} is valid ({} field(s))",
            Color::Green.bold().paint("✓"),
            display_path(input_arg(&args.file)),
            schema.fields.len()
        );
    }
    Ok(())
}
