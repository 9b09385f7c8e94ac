/// Position of a viewport point relative to the container's top-left corner.
pub fn client_to_container(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Live bounding rect of the map container, if it is in the document.
pub fn container_rect(container_id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    Some(element.get_bounding_client_rect())
}

/// A pointer position inside the map, together with the container size the
/// map was drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerPoint {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pure half of [`locate_in_container`], usable without a DOM.
///
/// `drawn` is the size the tiles and marker were laid out for. The pointer
/// is resolved against that size so it hits what the user sees, even if the
/// element has been resized since the last render.
pub fn point_in_rect(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    drawn: (f64, f64),
) -> Option<ContainerPoint> {
    let (width, height) = drawn;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let (x, y) = client_to_container(client_x, client_y, rect_left, rect_top);
    Some(ContainerPoint {
        x,
        y,
        width,
        height,
    })
}

/// Resolve client coordinates against the container's live position and the
/// size it was drawn at.
pub fn locate_in_container(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    drawn: (f64, f64),
) -> Option<ContainerPoint> {
    let rect = container_rect(container_id)?;
    point_in_rect(client_x, client_y, rect.left(), rect.top(), drawn)
}
