pub mod error;
pub mod logger;
pub mod null_default;
pub mod validation;
