// Domain layer: roster models and ports. The HTTP layer only sees these.

pub mod model;
pub mod ports;
