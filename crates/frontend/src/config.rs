use rtp_shared::config::AppConfig;
use tracing::{debug, warn};

/// Id of the optional `<script type="application/json">` element the host
/// page can use to override widget settings.
pub const CONFIG_ELEMENT_ID: &str = "rtp-config";

/// Read configuration from the host page, falling back to defaults when the
/// element is absent or its JSON is malformed.
pub fn load() -> AppConfig {
    let Some(json) = embedded_json() else {
        debug!("no #{CONFIG_ELEMENT_ID} element, using default config");
        return AppConfig::default();
    };
    match AppConfig::from_json(&json) {
        Ok(config) => {
            debug!(?config, "loaded config from host page");
            config
        }
        Err(err) => {
            warn!(%err, "ignoring malformed #{CONFIG_ELEMENT_ID}");
            AppConfig::default()
        }
    }
}

fn embedded_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
