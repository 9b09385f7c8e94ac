use dioxus::prelude::*;
use rtp_shared::locate::ModalKind;

fn modal_text(kind: ModalKind) -> (&'static str, &'static str) {
    match kind {
        ModalKind::Locating => (
            "Finding your location",
            "Your browser may ask for permission to share where you are. \
             You'll be taken to the plaques near you as soon as it answers.",
        ),
        ModalKind::PermissionDenied => (
            "We couldn't get your location",
            "Location access was denied. To see plaques near you, allow this \
             site to use your location in your browser settings and try again.",
        ),
    }
}

#[component]
pub fn LocationModal(mut modal: Signal<Option<ModalKind>>) -> Element {
    let current = *modal.read();
    let Some(kind) = current else {
        return rsx! {};
    };
    let (title, body) = modal_text(kind);

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| modal.set(None),

            div {
                id: kind.element_id(),
                class: "modal",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h2 { "{title}" }
                p { "{body}" }

                if kind == ModalKind::Locating {
                    div { class: "spinner" }
                }

                button {
                    class: "close-modal",
                    onclick: move |_| modal.set(None),
                    "Close"
                }
            }
        }
    }
}
