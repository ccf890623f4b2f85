// Public API entities
// These types define the request and response bodies of the HTTP surface.
pub mod chat;
pub mod common;
pub mod mood;
pub mod relay;
pub mod symptom_check;

pub use common::ErrorResponse;
