// Adapters layer: concrete record sources.

pub mod memory;
pub mod mongo;
