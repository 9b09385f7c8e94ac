use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use rtp_shared::config::{AppConfig, PickerConfig};
use rtp_shared::projection::{visible_tiles, PlacedTile, TILE_SIZE};
use rtp_shared::view::MapViewState;
use tracing::{debug, warn};

use crate::coords;

/// Drag threshold in pixels; movement below this is treated as a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Touch drag threshold, larger than for a mouse.
const TOUCH_DRAG_THRESHOLD: f64 = 8.0;

/// Container size assumed until the element has been measured.
const FALLBACK_WIDTH: f64 = 640.0;
const FALLBACK_HEIGHT: f64 = 400.0;

const MARKER_WIDTH: f64 = 24.0;
const MARKER_HEIGHT: f64 = 36.0;

/// Map pin, tip at the bottom centre of its 24x36 box.
const MARKER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="36" viewBox="0 0 24 36"><path d="M12 0C5.4 0 0 5.4 0 12c0 9 12 24 12 24s12-15 12-24C24 5.4 18.6 0 12 0z" fill="#d93a2b" stroke="white" stroke-width="1.5"/><circle cx="12" cy="12" r="4.5" fill="white"/></svg>"##;

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Zoom level after one wheel notch. Tiles only exist at whole levels, so
/// every notch is exactly one level regardless of its magnitude.
fn wheel_zoom(current: u8, delta_y: f64, config: &PickerConfig) -> u8 {
    let step = if delta_y < 0.0 {
        1
    } else if delta_y > 0.0 {
        -1
    } else {
        0
    };
    config.clamp_zoom(i32::from(current) + step)
}

/// Inline style placing the pin so its tip sits on (`x`, `y`).
fn marker_style(x: f64, y: f64) -> String {
    format!(
        "left:{}px;top:{}px;width:{MARKER_WIDTH}px;height:{MARKER_HEIGHT}px;",
        x - MARKER_WIDTH / 2.0,
        y - MARKER_HEIGHT
    )
}

fn tile_style(placed: &PlacedTile) -> String {
    format!(
        "left:{}px;top:{}px;width:{TILE_SIZE}px;height:{TILE_SIZE}px;",
        placed.left, placed.top
    )
}

fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Refresh the cached container size from the DOM.
fn measure(container_id: &str, size: &mut Signal<(f64, f64)>) {
    let Some(rect) = coords::container_rect(container_id) else {
        return;
    };
    let measured = (rect.width(), rect.height());
    if measured.0 > 0.0 && measured.1 > 0.0 && *size.peek() != measured {
        size.set(measured);
    }
}

/// Move the marker to the point under the pointer and write its coordinate
/// into the location field. `drawn` is the size the map was rendered at.
fn handle_click(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    drawn: (f64, f64),
    view: &mut Signal<MapViewState>,
    location_field: &mut Signal<String>,
) {
    let Some(point) = coords::locate_in_container(client_x, client_y, container_id, drawn) else {
        warn!(container_id, "map container missing or collapsed, click ignored");
        return;
    };
    let coord = view
        .read()
        .coordinate_at(point.x, point.y, point.width, point.height);
    let text = view.write().click(coord);
    debug!(%coord, "marker moved");
    location_field.set(text);
}

#[component]
pub fn MapPicker(location_field: Signal<String>) -> Element {
    let app_config = use_context::<AppConfig>();
    let config = use_hook(|| app_config.picker.clone());

    let mut location_field = location_field;

    // One widget instance owns its view; nothing here is global.
    let mut view = use_signal(|| MapViewState::initialize(&config));
    let mut size = use_signal(|| (FALLBACK_WIDTH, FALLBACK_HEIGHT));

    // Coordinates typed into the field move the marker. Text written by a
    // click parses back to the current marker, so it is a no-op here.
    use_effect(move || {
        let text = location_field.read().clone();
        let current = *view.peek();
        let mut next = current;
        if next.place_from_field(&text).is_ok() && next.marker != current.marker {
            if next.marker.is_valid() {
                debug!(marker = %next.marker, "marker set from location field");
            } else {
                warn!(marker = %next.marker, "location field holds an out-of-range coordinate");
            }
            view.set(next);
        }
    });

    // Mouse drag
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start = use_signal(|| (0.0_f64, 0.0_f64));
    let mut drag_origin = use_signal(|| *view.peek());

    // Touch
    let mut touch_start = use_signal(|| None::<(f64, f64)>);
    let mut touch_did_pan = use_signal(|| false);
    let mut touch_origin = use_signal(|| *view.peek());

    let state = *view.read();
    let (width, height) = *size.read();
    let tiles = visible_tiles(state.center, state.zoom, width, height);
    let (marker_x, marker_y) = state.marker_position(width, height);
    let marker_style = marker_style(marker_x, marker_y);

    let container_id = config.container_id.clone();
    let tile_url = config.tile_url.clone();
    let attribution = config.attribution.clone();

    let container_class = if *is_dragging.read() && *did_drag.read() {
        "map-picker dragging"
    } else {
        "map-picker"
    };

    let on_mounted = {
        let id = container_id.clone();
        move |_: Event<MountedData>| measure(&id, &mut size)
    };

    // Pointer positions are resolved against the size the map was drawn at.
    // Re-measuring afterwards makes the next render match the live element.
    let on_wheel = {
        let config = config.clone();
        move |evt: Event<WheelData>| {
            evt.prevent_default();
            let delta_y = wheel_delta_y(evt.data().delta());
            let new_zoom = wheel_zoom(view.read().zoom, delta_y, &config);
            let client = evt.data().client_coordinates();
            let drawn = *size.read();
            if let Some(point) =
                coords::locate_in_container(client.x, client.y, &config.container_id, drawn)
            {
                view.write()
                    .zoom_at(new_zoom, point.x, point.y, point.width, point.height);
            }
            measure(&config.container_id, &mut size);
        }
    };

    let on_mouse_down = {
        let id = container_id.clone();
        move |evt: Event<MouseData>| {
            if evt.trigger_button() != Some(MouseButton::Primary) {
                return;
            }
            measure(&id, &mut size);
            let client = evt.client_coordinates();
            is_dragging.set(true);
            did_drag.set(false);
            drag_start.set((client.x, client.y));
            drag_origin.set(*view.read());
        }
    };

    let on_mouse_up = {
        let id = container_id.clone();
        move |evt: Event<MouseData>| {
            let was_pressed = *is_dragging.read();
            let moved = *did_drag.read();
            is_dragging.set(false);
            if was_pressed && !moved {
                let client = evt.client_coordinates();
                let drawn = *size.read();
                handle_click(client.x, client.y, &id, drawn, &mut view, &mut location_field);
            }
        }
    };

    let on_double_click = {
        let config = config.clone();
        move |evt: Event<MouseData>| {
            evt.prevent_default();
            view.write().reset(&config);
        }
    };

    let on_touch_start = {
        let id = container_id.clone();
        move |evt: Event<TouchData>| {
            evt.prevent_default();
            measure(&id, &mut size);
            let touches = evt.data().touches();
            if touches.len() == 1 {
                let c = touches[0].client_coordinates();
                touch_start.set(Some((c.x, c.y)));
                touch_did_pan.set(false);
                touch_origin.set(*view.read());
            } else {
                // Multi-touch is never a tap.
                touch_start.set(None);
                touch_did_pan.set(true);
            }
        }
    };

    let on_touch_end = {
        let id = container_id.clone();
        move |evt: Event<TouchData>| {
            evt.prevent_default();
            if !evt.data().touches().is_empty() {
                return;
            }
            let start = *touch_start.read();
            if let (Some((x, y)), false) = (start, *touch_did_pan.read()) {
                let drawn = *size.read();
                handle_click(x, y, &id, drawn, &mut view, &mut location_field);
            }
            touch_start.set(None);
        }
    };

    rsx! {
        div { class: "map-picker-wrapper",
            div {
                id: "{container_id}",
                class: "{container_class}",

                onmounted: on_mounted,
                onwheel: on_wheel,
                onmousedown: on_mouse_down,

                onmousemove: move |evt: Event<MouseData>| {
                    if !*is_dragging.read() {
                        return;
                    }
                    let client = evt.client_coordinates();
                    let (start_x, start_y) = *drag_start.read();
                    let dx = client.x - start_x;
                    let dy = client.y - start_y;

                    if !*did_drag.read() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                        did_drag.set(true);
                    }
                    if *did_drag.read() {
                        let mut next = *drag_origin.read();
                        next.pan_by(dx, dy);
                        view.set(next);
                    }
                },

                onmouseup: on_mouse_up,

                onmouseleave: move |_| {
                    is_dragging.set(false);
                },

                ondoubleclick: on_double_click,
                ontouchstart: on_touch_start,

                ontouchmove: move |evt: Event<TouchData>| {
                    evt.prevent_default();
                    let touches = evt.data().touches();
                    if touches.len() != 1 {
                        return;
                    }
                    let c = touches[0].client_coordinates();
                    let cur = (c.x, c.y);
                    let Some(start) = *touch_start.read() else { return };
                    if !*touch_did_pan.read() && point_distance(start, cur) > TOUCH_DRAG_THRESHOLD {
                        touch_did_pan.set(true);
                    }
                    if *touch_did_pan.read() {
                        let mut next = *touch_origin.read();
                        next.pan_by(cur.0 - start.0, cur.1 - start.1);
                        view.set(next);
                    }
                },

                ontouchend: on_touch_end,

                ontouchcancel: move |_evt: Event<TouchData>| {
                    touch_start.set(None);
                    touch_did_pan.set(false);
                },

                div { class: "map-tiles",
                    for placed in tiles {
                        img {
                            key: "{placed.tile.z}/{placed.column}/{placed.tile.y}",
                            class: "map-tile",
                            src: placed.tile.url(&tile_url),
                            style: tile_style(&placed),
                            alt: "",
                            draggable: "false",
                        }
                    }
                }

                div {
                    class: "map-marker",
                    style: "{marker_style}",
                    dangerous_inner_html: MARKER_SVG,
                }

                div { class: "map-attribution", "{attribution}" }
            }

            p { class: "map-hint",
                "Click the plaque's location on the map, or enter its lat/lng location."
            }
        }
    }
}
