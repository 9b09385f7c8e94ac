pub mod locate_button;
pub mod location_modal;
pub mod map_picker;
