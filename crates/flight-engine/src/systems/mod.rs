pub mod flight;
pub mod orbit;
pub mod render;
