// Domain layer: core models and ports (interfaces). Nothing here touches the filesystem or randomness directly.

pub mod model;
pub mod ports;
