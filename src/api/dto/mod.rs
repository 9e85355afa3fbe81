//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs serialize with camelCase field names. The creation request
//! tolerates loosely typed fields, see [`create::CreateShortUrlRequest`].

pub mod clicks;
pub mod create;
pub mod health;
pub mod stats;
