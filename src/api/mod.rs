//! HTTP API module for the PDKS report assistant.
//!
//! This module exposes the report assembler and the dialogue policy as
//! `POST /report`, `POST /chat` and `GET /status`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ChatRequest, YEAR_RANGE, validate_year};
pub use response::{ApiError, ApiErrorResponse, StatusResponse};
pub use state::AppState;
