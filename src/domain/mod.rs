// Domain layer: the name record model and the console program port.

pub mod model;
pub mod ports;
