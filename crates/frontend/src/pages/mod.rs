pub mod add_plaque;
pub mod home;
