//! Request handler module
//!
//! Routing dispatch plus the health and BMI calculation handlers.

pub mod bmi;
pub mod health;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
