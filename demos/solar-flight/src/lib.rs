use wasm_bindgen::prelude::*;

mod bodies;
mod rng;
mod rocket;
mod world;
pub use world::SolarFlight;

flight_web::export_flight!(SolarFlight, "solar-flight");
