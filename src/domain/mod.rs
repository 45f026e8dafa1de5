// Domain layer: CPF value types and ports (interfaces). No I/O here.

pub mod model;
pub mod ports;
