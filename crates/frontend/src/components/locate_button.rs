use dioxus::prelude::*;
use rtp_shared::config::{AppConfig, LocateConfig};
use rtp_shared::locate::{settle_locate, start_locate, LocateStart, ModalKind};
use tracing::{info, warn};

use crate::{browser, geolocation};

/// Ask the browser where the user is, then send them to plaques nearby.
///
/// The locating modal stays up while the request is pending. Failures are
/// handled here: an alert, the permission modal, or the fallback page.
pub async fn find_near_here(config: LocateConfig, mut modal: Signal<Option<ModalKind>>) {
    let effects = match start_locate(geolocation::is_supported(), &config) {
        LocateStart::Finished(effects) => {
            warn!("geolocation unsupported");
            effects
        }
        LocateStart::Request(before) => {
            browser::apply_effects(before, &mut modal);
            let result = geolocation::current_position(&config).await;
            match &result {
                Ok(coord) => info!(%coord, "position found"),
                Err(err) => warn!(?err, "position request failed"),
            }
            settle_locate(result, &config)
        }
    };
    browser::apply_effects(effects, &mut modal);
}

#[component]
pub fn LocateButton(modal: Signal<Option<ModalKind>>) -> Element {
    let config = use_context::<AppConfig>().locate;

    rsx! {
        button {
            class: "locate-button",
            onclick: move |_| {
                spawn(find_near_here(config.clone(), modal));
            },
            "Find plaques near me"
        }
    }
}
