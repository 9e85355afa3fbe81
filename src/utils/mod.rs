//! Utility functions used across the application.
//!
//! - [`shortcode`] - Shortcode generation and validation
//! - [`client_ip`] - Client IP extraction from HTTP requests

pub mod client_ip;
pub mod shortcode;
