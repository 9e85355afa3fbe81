//! HTTP request handlers for API endpoints.
//!
//! Every handler reports its outcome to the log sink under a stack name
//! identifying the endpoint.

pub mod create;
pub mod health;
pub mod redirect;
pub mod stats;

pub use create::create_short_url_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
