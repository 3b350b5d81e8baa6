//! Facecheck API Library
//!
//! HTTP handlers, middleware and application setup for the image-analysis service.

mod api_doc;
pub mod constants;
pub mod error;
mod handlers;
mod middleware;
pub mod setup;
pub mod state;
mod telemetry;
mod utils;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
