mod api;
mod components;
mod config;
mod pages;

use dioxus::prelude::*;

use config::AppConfig;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(AppConfig::resolve);
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        pages::viewer::Viewer {}
    }
}

fn main() {
    launch(App);
}
