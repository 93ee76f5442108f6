use dioxus::prelude::*;

use crate::{Route, theme::Theme};

#[component]
pub fn Layout() -> Element {
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));
    let theme_val = theme();
    let page_bg_color = theme_val.page_bg_color();
    let text_color = theme_val.text_color();
    let surface_color = theme_val.surface1_color();

    rsx! {
		div {
			class: "min-h-screen flex flex-col",
			style: "background-color: {page_bg_color}; color: {text_color}",

			header { class: "p-4 shrink-0",
				div { class: "max-w-6xl mx-auto w-full flex justify-between items-center",
					Link { to: Route::Home { example: None },
						h1 { class: "text-2xl font-bold", "Schemaform" }
					}

					button {
						class: "px-4 py-2 rounded-lg text-sm font-semibold transition-colors",
						style: "background-color: {surface_color}",
						onclick: move |_| theme.set(theme().toggle()),
						if theme() == Theme::Dark {
							"☀️ "
						} else {
							"🌙 "
						}
						"{theme_val.label()}"
					}
				}
			}

			main { class: "flex-1 min-h-0",
				div { class: "max-w-screen-2xl mx-auto w-full h-full", Outlet::<Route> {} }
			}

			footer { class: "p-2 text-center text-sm opacity-50 shrink-0", "Schemaform" }
		}
	}
}
