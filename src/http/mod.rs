//! HTTP protocol layer module
//!
//! Query string parsing and response building, decoupled from handler logic.

pub mod query;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_options_response, error_response, json_response, not_found,
};
