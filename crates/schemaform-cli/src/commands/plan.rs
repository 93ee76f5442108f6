//! Plan command - prints the widgets a schema renders to.

use nu_ansi_term::Color;
use schemaform::{InputMode, WidgetKind, WidgetSpec, plan};

use crate::util::load_schema;

#[derive(clap::Args)]
pub struct Args {
    /// Path to the schema document (use - for stdin)
    pub file: String,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let schema = load_schema(&args.file)?;
    let widgets = plan(&schema);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&widgets)?);
        return Ok(());
    }

    println!("{}", Color::Cyan.bold().paint(&schema.title));
    if !schema.description.is_empty() {
        println!("{}", schema.description);
    }
    println!();
    for widget in &widgets {
        println!("{}", describe_widget(widget));
    }
    Ok(())
}

pub fn widget_kind_name(kind: &WidgetKind) -> &'static str {
    match kind {
        WidgetKind::SingleLineInput {
            input_mode: InputMode::Text,
            ..
        } => "text input",
        WidgetKind::SingleLineInput {
            input_mode: InputMode::Email,
            ..
        } => "email input",
        WidgetKind::MultiLineInput { .. } => "text area",
        WidgetKind::SingleSelect { .. } => "select",
        WidgetKind::RadioGroup { .. } => "radio group",
    }
}

/// One summary line per widget, followed by its choices.
pub fn describe_widget(widget: &WidgetSpec) -> String {
    let marker = if widget.required { " *" } else { "" };
    let mut line = format!(
        "{}{marker} [{}] ({})",
        widget.label,
        widget.id,
        widget_kind_name(&widget.kind)
    );
    if let Some(placeholder) = widget.kind.placeholder() {
        line.push_str(&format!(" placeholder: {placeholder:?}"));
    }
    for choice in widget.kind.choices().iter().filter(|c| c.selectable) {
        line.push_str(&format!("\n    - {} ({})", choice.label, choice.value));
    }
    line
}
