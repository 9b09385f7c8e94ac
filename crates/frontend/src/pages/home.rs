use dioxus::prelude::*;
use rtp_shared::locate::ModalKind;

use crate::components::locate_button::LocateButton;
use crate::components::location_modal::LocationModal;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let modal = use_signal(|| None::<ModalKind>);

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Read the Plaque" }
            }
            div { class: "panel",
                p { "See the plaques around you. Your browser will ask to share your location." }
                LocateButton { modal }
            }
            div { class: "panel",
                p { "Found one that isn't here yet?" }
                Link { to: Route::AddPlaque {}, "Add a plaque" }
            }
            LocationModal { modal }
        }
    }
}
