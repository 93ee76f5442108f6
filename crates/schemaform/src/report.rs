//! Schema error rendering.
//!
//! Renders a [`SchemaError`] against the schema source with annotate-snippets.
//! Syntax errors point at the reported line/column; field errors point at the
//! `"id"` entry of the offending field (the second one for duplicates). When no
//! location can be resolved only the title is rendered.

use std::ops::Range;

use annotate_snippets::{AnnotationKind as SnippetAnnotation, Group, Level, Renderer, Snippet};
use regex::Regex;

use crate::error::SchemaError;
use crate::schema::FieldType;

/// Render a schema error to a string, with ANSI colors when `styled`.
pub fn format_schema_error(error: &SchemaError, source: &str, path: &str, styled: bool) -> String {
    let title = error.to_string();
    let label = annotation_label(error);
    let help = help_text(error);

    let mut groups: Vec<Group<'_>> = Vec::new();
    match locate(error, source) {
        Some(span) => groups.push(
            Level::ERROR.primary_title(title.as_str()).element(
                Snippet::source(source)
                    .line_start(1)
                    .path(path)
                    .annotation(SnippetAnnotation::Primary.span(span).label(label)),
            ),
        ),
        None => groups.push(
            Level::ERROR.primary_title(title.as_str()).element(
                Snippet::source("")
                    .line_start(1)
                    .path(path)
                    .annotation(SnippetAnnotation::Primary.span(0..0)),
            ),
        ),
    }

    if let Some(help) = help.as_deref() {
        groups.push(
            Level::HELP.primary_title(help).element(
                Snippet::source(source)
                    .line_start(1)
                    .path(path)
                    .annotation(SnippetAnnotation::Context.span(0..0)),
            ),
        );
    }

    let renderer = if styled {
        Renderer::styled()
    } else {
        Renderer::plain()
    };
    renderer.render(&groups).to_string()
}

fn annotation_label(error: &SchemaError) -> &'static str {
    match error {
        SchemaError::Syntax { .. } => "invalid JSON here",
        SchemaError::MalformedDocument { .. } => "in this document",
        SchemaError::UnsupportedFieldType { .. } => "field with unsupported type",
        SchemaError::DuplicateFieldId { .. } => "id already used by an earlier field",
        SchemaError::MissingOptions { .. } => "field without options",
        SchemaError::DuplicateOptionValue { .. } => "field with duplicate option values",
        SchemaError::InvalidPattern { .. } => "field with invalid pattern",
    }
}

fn help_text(error: &SchemaError) -> Option<String> {
    match error {
        SchemaError::UnsupportedFieldType { .. } => {
            let names: Vec<&str> = FieldType::ALL.iter().map(|ty| ty.as_str()).collect();
            Some(format!("supported field types: {}", names.join(", ")))
        }
        SchemaError::MissingOptions { .. } => Some(
            "add an \"options\" list of {\"value\": ..., \"label\": ...} entries".to_string(),
        ),
        _ => None,
    }
}

fn locate(error: &SchemaError, source: &str) -> Option<Range<usize>> {
    match error {
        SchemaError::Syntax { line, column, .. } => Some(line_column_span(source, *line, *column)),
        SchemaError::DuplicateFieldId { id } => {
            let mut matches = id_entries(source, id);
            let first = matches.next();
            matches.next().or(first)
        }
        other => {
            let id = other.field_id()?;
            id_entries(source, id).next()
        }
    }
}

/// Spans of `"id": "<id>"` entries in the source.
fn id_entries<'s>(source: &'s str, id: &str) -> impl Iterator<Item = Range<usize>> + 's {
    let pattern = format!(r#""id"\s*:\s*"{}""#, regex::escape(id));
    Regex::new(&pattern)
        .ok()
        .into_iter()
        .flat_map(move |regex| {
            regex
                .find_iter(source)
                .map(|m| m.range())
                .collect::<Vec<_>>()
        })
}

/// One-character span at a 1-based line and column, clamped to the source.
fn line_column_span(source: &str, line: usize, column: usize) -> Range<usize> {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut start = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let end = source[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    start..end
}
