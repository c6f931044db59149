// Domain layer: the counter, the emitted lines and the sink port. No I/O here.

pub mod model;
pub mod ports;
