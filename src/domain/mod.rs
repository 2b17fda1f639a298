// Domain layer: quote models and ports (interfaces).

pub mod model;
pub mod ports;
