// Domain layer: the parsed-value model and the ports the delivery pipeline talks through.

pub mod model;
pub mod ports;
