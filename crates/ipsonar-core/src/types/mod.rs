mod batch;
mod geo;
mod params;

pub use batch::*;
pub use geo::*;
pub use params::*;
