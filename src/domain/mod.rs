// Domain layer: the record shapes and the port the runner reads through.

pub mod model;
pub mod ports;
