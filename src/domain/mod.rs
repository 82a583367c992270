// Domain layer: table records and ports. No I/O here.

pub mod model;
pub mod ports;
