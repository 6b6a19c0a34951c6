//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod tick;

// Re-export the main handler for convenience
pub use handler::{AppState, function_handler as handler, route};
pub use tick::TickService;
