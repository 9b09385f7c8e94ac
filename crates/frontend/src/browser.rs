use dioxus::prelude::*;
use rtp_shared::locate::{Effect, ModalKind};
use tracing::{info, warn};

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!(alert_text = message, "no window to alert on");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        warn!(?err, "alert failed");
    }
}

/// Full-page navigation to `path` on the current origin.
pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        warn!(path, "no window to navigate");
        return;
    };
    info!(path, "navigating");
    if let Err(err) = window.location().set_href(path) {
        warn!(?err, path, "navigation failed");
    }
}

/// Carry out locate effects in order.
pub fn apply_effects(effects: Vec<Effect>, modal: &mut Signal<Option<ModalKind>>) {
    for effect in effects {
        match effect {
            Effect::Alert(message) => alert(&message),
            Effect::ShowModal(kind) => modal.set(Some(kind)),
            Effect::CloseModal => modal.set(None),
            Effect::Navigate(path) => navigate(&path),
        }
    }
}
