//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, request ID)
//!     → quote.rs (parse form type, replay selection snapshot)
//!     → presentation::Calculator (quote, breakdown, display total)
//!     → response.rs (errors as JSON with status)
//!     → Send to client
//! ```
//!
//! # Routes
//! - `GET /health`
//! - `GET /api/v1/catalog/{form}`
//! - `POST /api/v1/quote/{form}`

pub mod quote;
pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{AppState, HttpServer};
