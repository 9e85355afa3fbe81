//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation inputs are separate structs
//! (`NewShortUrl`, `NewClick`) so store-assigned identifiers never have to be
//! invented by callers.
//!
//! - [`ShortUrl`] - A shortcode → target URL mapping with an expiry
//! - [`Click`] - One recorded redirect

pub mod click;
pub mod short_url;

pub use click::{Click, NewClick};
pub use short_url::{NewShortUrl, ShortUrl, ShortUrlWithClicks};
