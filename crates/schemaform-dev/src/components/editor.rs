//! Schema source editor with a copy-to-clipboard action.

use dioxus::prelude::*;

use crate::browser;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    fn message(self) -> &'static str {
        match self {
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Failed to copy.",
        }
    }
}

/// Status line after a copy. Each copy bumps `generation`; a timer only
/// clears the status it was started for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CopyNotice {
    generation: u64,
    status: Option<CopyStatus>,
}

impl CopyNotice {
    fn show(&mut self, status: CopyStatus) -> u64 {
        self.generation += 1;
        self.status = Some(status);
        self.generation
    }

    fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.status = None;
        }
    }
}

#[component]
pub fn Editor(
    content: ReadSignal<String>,
    theme: ReadSignal<Theme>,
    on_change: EventHandler<String>,
) -> Element {
    let mut notice: Signal<CopyNotice> = use_signal(CopyNotice::default);

    let handle_input = move |e: Event<FormData>| {
        on_change.call(e.value());
    };

    let copy = move |_: MouseEvent| {
        let text = content();
        spawn(async move {
            let status = match browser::copy_to_clipboard(&text).await {
                Ok(()) => CopyStatus::Copied,
                Err(e) => {
                    tracing::warn!("copy failed: {e}");
                    CopyStatus::Failed
                }
            };
            let generation = notice.write().show(status);
            browser::sleep_ms(2000).await;
            notice.write().expire(generation);
        });
    };

    let theme_val = theme();
    let bg_color = theme_val.bg_color();
    let caret_color = theme_val.caret_color();
    let surface1_color = theme_val.surface1_color();
    let status = notice().status;
    let status_color = match status {
        Some(CopyStatus::Failed) => theme_val.error_color(),
        _ => theme_val.success_color(),
    };

    rsx! {
        div { class: "w-full h-full flex flex-col min-h-0",
            textarea {
                class: "flex-1 w-full m-0 p-3 font-mono text-sm resize-none outline-none border-0",
                style: "background-color: {bg_color}; caret-color: {caret_color}; line-height: 1.625",
                value: "{content}",
                oninput: handle_input,
                spellcheck: false,
                autocomplete: "off",
                autocorrect: "off",
                autocapitalize: "off",
            }
            div { class: "p-2 flex items-center gap-3 shrink-0",
                button {
                    class: "px-3 py-1 rounded text-sm font-semibold",
                    style: "background-color: {surface1_color}",
                    onclick: copy,
                    "Copy JSON"
                }
                if let Some(status) = status {
                    span { class: "text-sm", style: "color: {status_color}", "{status.message()}" }
                }
            }
        }
    }
}
