use rtp_shared::config::LocateConfig;
use rtp_shared::geo::Coordinate;
use rtp_shared::locate::LocateError;
use wasm_bindgen::{JsCast, JsValue};
use tracing::warn;
use wasm_bindgen_futures::JsFuture;

/// Whether `navigator.geolocation` exists.
pub fn is_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("geolocation"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn position_options(config: &LocateConfig) -> web_sys::PositionOptions {
    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(config.enable_high_accuracy);
    options.set_timeout(config.timeout_ms);
    options.set_maximum_age(config.maximum_age_ms);
    options
}

/// `code` of a rejected position request, 0 when the value has none.
fn error_code(err: &JsValue) -> u16 {
    js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as u16)
        .unwrap_or(0)
}

/// One-shot position request. The browser owns the request once issued;
/// dropping the future does not cancel it.
pub async fn current_position(config: &LocateConfig) -> Result<Coordinate, LocateError> {
    let geolocation = web_sys::window()
        .ok_or(LocateError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| LocateError::Unsupported)?;
    let options = position_options(config);

    // getCurrentPosition calls exactly one of its callbacks, which maps
    // directly onto resolving or rejecting a promise.
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            if let Err(err) = reject.call1(&JsValue::NULL, &err) {
                warn!(?err, "could not reject position request");
            }
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: web_sys::Position = value.unchecked_into();
            let coords = position.coords();
            Ok(Coordinate::new(coords.latitude(), coords.longitude()))
        }
        Err(err) => Err(LocateError::from_code(error_code(&err))),
    }
}
