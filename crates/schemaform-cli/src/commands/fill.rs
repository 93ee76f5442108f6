//! Fill command - interactive terminal form.
//!
//! Prompts go to stderr so that the exported record can be piped from stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use nu_ansi_term::Color;
use schemaform::export;
use schemaform::{Choice, FormState, ResultRecord, WidgetKind, WidgetSpec};
use tracing::debug;

use crate::commands::plan::widget_kind_name;
use crate::commands::submit::print_rejection;
use crate::util::{load_schema, output_path, write_output};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the schema document
    pub file: String,

    /// Write the record to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the record to form-submission.json
    #[arg(long, conflicts_with = "output")]
    pub download: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    if args.file == "-" {
        anyhow::bail!("fill reads answers from stdin; pass the schema as a file");
    }
    let schema = load_schema(&args.file)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt = io::stderr();
    let Some(record) = fill_form(FormState::new(schema), &mut input, &mut prompt)? else {
        eprintln!("{}", Color::Yellow.paint("Aborted: input ended before submission"));
        std::process::exit(1);
    };

    let artifact = export::export(&record, &export::Config::default())?;
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

/// Ask for every widget until the form submits.
///
/// Returns `None` when the input ends first.
pub fn fill_form<R: BufRead, W: Write>(
    mut form: FormState,
    input: &mut R,
    prompt: &mut W,
) -> anyhow::Result<Option<ResultRecord>> {
    let schema = form.schema().clone();
    writeln!(prompt, "{}", Color::Cyan.bold().paint(&schema.title))?;
    if !schema.description.is_empty() {
        writeln!(prompt, "{}", schema.description)?;
    }

    let mut pending = form.widgets();
    loop {
        for widget in &pending {
            form = match ask_until_valid(form, widget, input, prompt)? {
                Some(form) => form,
                None => return Ok(None),
            };
        }

        let (next, outcome) = form.submit();
        form = next;
        match outcome {
            Ok(record) => {
                writeln!(prompt, "{} submitted", Color::Green.bold().paint("✓"))?;
                return Ok(Some(record));
            }
            Err(state) => {
                print_rejection(form.schema(), &state);
                pending = form
                    .widgets()
                    .into_iter()
                    .filter(|widget| state.error(&widget.id).is_some())
                    .collect();
            }
        }
    }
}

fn ask_until_valid<R: BufRead, W: Write>(
    mut form: FormState,
    widget: &WidgetSpec,
    input: &mut R,
    prompt: &mut W,
) -> anyhow::Result<Option<FormState>> {
    loop {
        write_prompt(widget, prompt)?;
        let answer = match &widget.kind {
            WidgetKind::MultiLineInput { .. } => read_paragraph(input)?,
            _ => read_line(input)?,
        };
        let Some(answer) = answer else {
            return Ok(None);
        };

        let value = match resolve_answer(&widget.kind, &answer) {
            Ok(value) => value,
            Err(message) => {
                writeln!(prompt, "  {} {message}", Color::Red.paint("✗"))?;
                continue;
            }
        };
        form = form.with_value(&widget.id, value);
        if let Some(message) = form.error(&widget.id) {
            writeln!(prompt, "  {} {message}", Color::Red.paint("✗"))?;
            continue;
        }
        debug!(id = %widget.id, "field accepted");
        return Ok(Some(form));
    }
}

fn write_prompt<W: Write>(widget: &WidgetSpec, prompt: &mut W) -> io::Result<()> {
    let marker = if widget.required { " *" } else { "" };
    writeln!(
        prompt,
        "\n{}{marker} ({})",
        Color::White.bold().paint(&widget.label),
        widget_kind_name(&widget.kind)
    )?;
    for (index, choice) in selectable(widget.kind.choices()).enumerate() {
        writeln!(prompt, "  {}) {}", index + 1, choice.label)?;
    }
    match (&widget.kind, widget.kind.placeholder()) {
        (WidgetKind::MultiLineInput { .. }, Some(placeholder)) => {
            writeln!(prompt, "  ({placeholder}; finish with an empty line)")?
        }
        (WidgetKind::MultiLineInput { .. }, None) => {
            writeln!(prompt, "  (finish with an empty line)")?
        }
        (_, Some(placeholder)) => write!(prompt, "[{placeholder}] ")?,
        (_, None) => {}
    }
    write!(prompt, "> ")?;
    prompt.flush()
}

fn selectable(choices: &[Choice]) -> impl Iterator<Item = &Choice> {
    choices.iter().filter(|choice| choice.selectable)
}

/// Turn a typed answer into the field value.
///
/// Choice widgets accept the 1-based number or the option value; an empty
/// answer leaves the field unselected.
pub fn resolve_answer(kind: &WidgetKind, answer: &str) -> Result<String, String> {
    let choices = kind.choices();
    if choices.is_empty() {
        return Ok(answer.to_string());
    }

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(String::new());
    }
    if let Ok(number) = answer.parse::<usize>()
        && let Some(choice) = number.checked_sub(1).and_then(|i| selectable(choices).nth(i))
    {
        return Ok(choice.value.clone());
    }
    selectable(choices)
        .find(|choice| choice.value == answer)
        .map(|choice| choice.value.clone())
        .ok_or_else(|| format!("'{answer}' is not one of the listed choices"))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_paragraph<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut lines = Vec::new();
    loop {
        match read_line(input)? {
            Some(line) if line.is_empty() => break,
            Some(line) => lines.push(line),
            None if lines.is_empty() => return Ok(None),
            None => break,
        }
    }
    Ok(Some(lines.join("\n")))
}
