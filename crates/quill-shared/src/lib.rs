//! # Quill Shared
//!
//! Wire types shared between the server and its clients: request DTOs, the
//! external post projection, and error response bodies.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
