use clap::{Parser, Subcommand};
use nu_ansi_term::Color;
use tracing::Level;

mod commands {
    automod::dir!(pub "src/commands");
}
mod util;

#[derive(Parser)]
#[command(name = "schemaform", about = "Form schema utilities", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form schema document
    Check(commands::check::Args),
    /// Print the widgets a schema renders to
    Plan(commands::plan::Args),
    /// Validate field values against a schema and export the record
    Submit(commands::submit::Args),
    /// Fill a form interactively in the terminal
    Fill(commands::fill::Args),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Submit(args) => commands::submit::run(args),
        Commands::Fill(args) => commands::fill::run(args),
    };

    if let Err(e) = result {
        eprintln!("{}", Color::Red.paint(format!("Error: {e:#}")));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
