use crate::{
    Route,
    components::{editor::Editor, form_preview::FormPreview},
    theme::Theme,
};
use dioxus::prelude::*;
use schemaform::report::format_schema_error;
use schemaform::{FormSchema, FormState, SchemaError, parse_schema};

/// Bundled schemas offered by the example selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FormExample {
    #[default]
    Sample,
    Contact,
    Shipping,
    Survey,
}

impl FormExample {
    const ALL: &'static [FormExample] = &[
        FormExample::Sample,
        FormExample::Contact,
        FormExample::Shipping,
        FormExample::Survey,
    ];

    fn name(&self) -> &'static str {
        match self {
            FormExample::Sample => "Sample",
            FormExample::Contact => "Contact",
            FormExample::Shipping => "Shipping Address",
            FormExample::Survey => "Feedback Survey",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            FormExample::Sample => "sample",
            FormExample::Contact => "contact",
            FormExample::Shipping => "shipping",
            FormExample::Survey => "survey",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ex| ex.value() == value)
    }

    fn content(&self) -> &'static str {
        match self {
            FormExample::Sample => include_str!("../../assets/examples/sample.json"),
            FormExample::Contact => include_str!("../../assets/examples/contact.json"),
            FormExample::Shipping => include_str!("../../assets/examples/shipping.json"),
            FormExample::Survey => include_str!("../../assets/examples/survey.json"),
        }
    }
}

/// Heading shown above a schema error report.
fn error_heading(error: &SchemaError) -> &'static str {
    match error {
        SchemaError::Syntax { .. } => "Invalid JSON",
        _ => "Invalid form schema",
    }
}

/// Fresh session for an edit; a broken edit yields `None` and keeps the old
/// form on screen.
fn session_for(parsed: Result<FormSchema, SchemaError>) -> Option<FormState> {
    parsed.ok().map(FormState::new)
}

/// Home page: schema editor on the left, live form on the right.
#[component]
pub fn Home(example: ReadSignal<Option<String>>) -> Element {
    let theme: Signal<Theme> = use_context();
    let navigator = use_navigator();

    let current_example = use_memo(move || {
        example()
            .as_deref()
            .and_then(FormExample::from_value)
            .unwrap_or_default()
    });

    let mut content = use_signal(|| FormExample::default().content().to_string());

    use_effect(move || {
        content.set(current_example().content().to_string());
    });

    let parsed = use_memo(move || parse_schema(&content()));

    let mut form = use_signal(|| {
        FormState::new(parse_schema(FormExample::default().content()).unwrap_or_default())
    });
    // Every edit starts a new session, even one that parses to the same schema.
    use_effect(move || {
        if let Some(next) = session_for(parse_schema(&content())) {
            tracing::debug!(fields = next.schema().fields.len(), "schema replaced");
            form.set(next);
        }
    });

    let schema_error = use_memo(move || {
        parsed().err().map(|error| {
            (
                error_heading(&error),
                format_schema_error(&error, &content(), "schema.json", false),
            )
        })
    });

    let theme_val = theme();
    let bg_color = theme_val.bg_color();
    let border_color = theme_val.border_color();
    let surface1_color = theme_val.surface1_color();
    let accent_color = theme_val.accent_color();
    let error_color = theme_val.error_color();

    rsx! {
        div { class: "h-full px-4 pb-4 flex gap-4",

            // Left column: schema editor
            div {
                class: "w-1/2 flex flex-col rounded border min-h-0",
                style: "border-color: {border_color}; background-color: {bg_color}",

                div {
                    class: "h-14 px-3 border-b text-base font-semibold shrink-0 flex justify-between items-center",
                    style: "border-color: {border_color}; background-color: {surface1_color}",
                    span { "Form Schema" }
                    select {
                        class: "px-4 py-2 rounded-lg border-2 text-base font-semibold cursor-pointer shadow-sm",
                        style: "border-color: {accent_color}; background-color: {bg_color}; color: {accent_color}",
                        value: "{current_example().value()}",
                        onchange: move |evt| {
                            navigator
                                .push(Route::Home {
                                    example: Some(evt.value()),
                                });
                        },
                        for ex in FormExample::ALL {
                            option { value: "{ex.value()}", "{ex.name()}" }
                        }
                    }
                }

                div { class: "flex-1 overflow-hidden min-h-0",
                    Editor { content, theme, on_change: move |s| content.set(s) }
                }

                if let Some((heading, report)) = schema_error() {
                    div {
                        class: "p-3 border-t font-mono text-sm max-h-60 overflow-auto shrink-0",
                        style: "border-color: {border_color}; color: {error_color}",
                        div { class: "font-bold mb-1", "{heading}" }
                        pre { class: "whitespace-pre-wrap", "{report}" }
                    }
                }
            }

            // Right column: form preview
            div {
                class: "w-1/2 flex flex-col rounded border min-h-0",
                style: "border-color: {border_color}; background-color: {bg_color}",

                div {
                    class: "h-14 px-3 border-b text-base font-semibold shrink-0 flex items-center",
                    style: "border-color: {border_color}; background-color: {surface1_color}",
                    span { "Preview" }
                }

                div { class: "flex-1 overflow-hidden min-h-0",
                    FormPreview { form, theme }
                }
            }
        }
    }
}
