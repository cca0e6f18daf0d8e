//! HTTP API module for the R&D credit engine.
//!
//! This module exposes the engine over a small REST API: credit estimates,
//! the active pricing table and a health check.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, ENGINE_VERSION};
pub use state::AppState;
