// Domain layer: request/payload models and ports to the encoder and storage.

pub mod model;
pub mod ports;
