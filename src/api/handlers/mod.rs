//! HTTP request handlers for API endpoints.

pub mod health;
pub mod make;
pub mod redirect;
pub mod stats;

pub use health::health_handler;
pub use make::make_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
