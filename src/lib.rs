//! BMI calculator HTTP service
//!
//! A single-purpose web service that computes Body Mass Index from query
//! parameters and classifies the result. Built on Tokio and Hyper.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
