mod browser;
mod components;
mod config;
mod coords;
mod geolocation;
mod pages;

use dioxus::prelude::*;
use pages::add_plaque::AddPlaque;
use pages::home::Home;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/add")]
    AddPlaque {},
}

const CSS: Asset = asset!("/assets/main.css");

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(config::load);

    rsx! {
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
