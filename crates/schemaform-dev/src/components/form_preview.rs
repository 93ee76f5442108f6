//! Live rendering of a [`FormState`].

use dioxus::prelude::*;
use schemaform::{FormPhase, FormState, WidgetKind, WidgetSpec};

use crate::browser;
use crate::theme::Theme;

#[component]
pub fn FormPreview(form: Signal<FormState>, theme: ReadSignal<Theme>) -> Element {
    let mut form = form;

    let on_submit = move |_: MouseEvent| {
        let (next, outcome) = form.read().clone().submit();
        if let Err(state) = &outcome {
            tracing::debug!(errors = state.error_count(), "submission rejected");
        }
        form.set(next);
    };

    let on_download = move |_: MouseEvent| {
        let Some(record) = form.read().last_record().cloned() else {
            return;
        };
        spawn(async move {
            if let Err(e) = browser::download_record(record).await {
                tracing::error!("download failed: {e:#}");
            }
        });
    };

    let current = form();
    let fields: Vec<(String, WidgetSpec, String, Option<String>)> = current
        .widgets()
        .into_iter()
        .map(|widget| {
            let value = current.value(&widget.id).to_string();
            let error = current.error(&widget.id).map(str::to_string);
            (widget.id.clone(), widget, value, error)
        })
        .collect();
    let record_json = current
        .last_record()
        .and_then(|record| serde_json::to_string_pretty(record).ok());

    let theme_val = theme();
    let subtext_color = theme_val.subtext_color();
    let accent_color = theme_val.accent_color();
    let success_color = theme_val.success_color();
    let surface1_color = theme_val.surface1_color();
    let border_color = theme_val.border_color();

    rsx! {
        div { class: "h-full overflow-auto p-4 flex flex-col gap-4",
            div {
                h2 { class: "text-xl font-bold", "{current.schema().title}" }
                if !current.schema().description.is_empty() {
                    p { class: "text-sm", style: "color: {subtext_color}", "{current.schema().description}" }
                }
            }

            for (id, widget, value, error) in fields {
                FieldWidget {
                    widget,
                    value,
                    error,
                    theme,
                    on_input: move |value: String| {
                        let next = form.read().clone().with_value(&id, value);
                        form.set(next);
                    },
                }
            }

            div { class: "flex items-center gap-3",
                button {
                    class: "px-4 py-2 rounded-lg font-semibold",
                    style: "background-color: {accent_color}; color: {theme_val.bg_color()}",
                    onclick: on_submit,
                    "Submit"
                }
                if current.phase() == FormPhase::Submitted {
                    span { class: "text-sm", style: "color: {success_color}", "Form submitted" }
                }
            }

            if let Some(json) = record_json {
                div {
                    class: "rounded border p-3 flex flex-col gap-2",
                    style: "border-color: {border_color}",
                    div { class: "flex justify-between items-center",
                        span { class: "text-xs font-bold uppercase opacity-60", "Submitted record" }
                        button {
                            class: "px-3 py-1 rounded text-sm font-semibold",
                            style: "background-color: {surface1_color}",
                            onclick: on_download,
                            "Download JSON"
                        }
                    }
                    pre { class: "font-mono text-sm whitespace-pre-wrap", "{json}" }
                }
            }
        }
    }
}

#[component]
fn FieldWidget(
    widget: WidgetSpec,
    value: String,
    error: Option<String>,
    theme: ReadSignal<Theme>,
    on_input: EventHandler<String>,
) -> Element {
    let theme_val = theme();
    let bg_color = theme_val.bg_color();
    let border_color = if error.is_some() {
        theme_val.error_color()
    } else {
        theme_val.border_color()
    };
    let error_color = theme_val.error_color();
    let input_style = format!("background-color: {bg_color}; border-color: {border_color}");
    let placeholder = widget.kind.placeholder().unwrap_or_default().to_string();
    let id = widget.id.clone();

    let control = match &widget.kind {
        WidgetKind::SingleLineInput { input_mode, .. } => rsx! {
            input {
                id: "{id}",
                class: "w-full px-3 py-2 rounded border",
                style: "{input_style}",
                r#type: input_mode.html_type(),
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e: Event<FormData>| on_input.call(e.value()),
            }
        },
        WidgetKind::MultiLineInput { .. } => rsx! {
            textarea {
                id: "{id}",
                class: "w-full px-3 py-2 rounded border",
                style: "{input_style}",
                rows: 4,
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e: Event<FormData>| on_input.call(e.value()),
            }
        },
        WidgetKind::SingleSelect { choices } => rsx! {
            select {
                id: "{id}",
                class: "w-full px-3 py-2 rounded border",
                style: "{input_style}",
                value: "{value}",
                onchange: move |e: Event<FormData>| on_input.call(e.value()),
                for choice in choices.iter() {
                    option {
                        value: "{choice.value}",
                        disabled: !choice.selectable,
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
        },
        WidgetKind::RadioGroup { choices } => rsx! {
            div { class: "flex flex-col gap-1",
                for choice in choices.iter().cloned() {
                    label { class: "flex items-center gap-2",
                        input {
                            r#type: "radio",
                            name: "{id}",
                            value: "{choice.value}",
                            checked: choice.value == value,
                            onchange: {
                                let selected = choice.value.clone();
                                move |_: Event<FormData>| on_input.call(selected.clone())
                            },
                        }
                        "{choice.label}"
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "flex flex-col gap-1",
            label { r#for: "{widget.id}", class: "font-semibold",
                "{widget.label}"
                if widget.required {
                    span { style: "color: {error_color}", " *" }
                }
            }
            {control}
            if let Some(message) = error {
                p { class: "text-sm", style: "color: {error_color}", "{message}" }
            }
        }
    }
}
