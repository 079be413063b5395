//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{Rejection, WeatherHandler, function_handler as handler};
