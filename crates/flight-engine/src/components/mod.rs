pub mod appearance;
pub mod visual;
