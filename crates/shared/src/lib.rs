pub mod config;
pub mod geo;
pub mod locate;
pub mod projection;
pub mod view;
