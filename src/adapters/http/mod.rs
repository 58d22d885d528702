//! HTTP adapter - the REST API and static pages.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::{ApiError, AppState};
pub use routes::{api_router, app_router, RouterOptions};
