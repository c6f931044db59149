// Adapters layer: concrete sinks for the ticker's output.

pub mod stdout;
