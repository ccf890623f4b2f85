// WellnessGuide-api lib.rs
//
// This is the main library file for the WellnessGuide API.
// It re-exports the APIs from the various modules.

pub mod api;
pub mod entities;
pub mod openapi;

pub use api::{create_application, AppState, ApplicationError};
