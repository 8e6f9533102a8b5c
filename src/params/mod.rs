//! URL parameter handling
//!
//! This module reads timer requests from the component's location and strips
//! them again on reset.

pub mod location;
pub mod parser;

// Re-export main types
pub use location::Location;
pub use parser::{parse_request, target_from_params, QueryParams, TimerRequest, RECOGNIZED_KEYS};
