mod components {
    automod::dir!(pub "src/components");
}
mod pages {
    automod::dir!(pub "src/pages");
}
mod browser;
mod theme;

use dioxus::prelude::*;
use pages::home::Home;

use crate::components::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/?:example")]
    Home { example: Option<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Schemaform Playground" }
        document::Link { rel: "stylesheet", href: asset!("/assets/tailwind.css") }
        Router::<Route> {}
    }
}
