use dioxus::prelude::*;
use rtp_shared::config::AppConfig;

use crate::components::map_picker::MapPicker;
use crate::Route;

#[component]
pub fn AddPlaque() -> Element {
    let field_id = use_context::<AppConfig>().picker.field_id;
    let mut location_field = use_signal(String::new);

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Add Plaque" }
                Link { to: Route::Home {}, "Back" }
            }
            div { class: "panel location-panel",
                label { r#for: "{field_id}", "Location" }
                input {
                    id: "{field_id}",
                    name: "{field_id}",
                    r#type: "text",
                    placeholder: "lat, lng",
                    value: "{location_field}",
                    oninput: move |evt: Event<FormData>| {
                        location_field.set(evt.value().to_string());
                    },
                }
            }
            MapPicker { location_field }
        }
    }
}
