// Domain layer: transfer models, ports, and the pure parse/count/render services.

pub mod model;
pub mod ports;

pub mod services;
