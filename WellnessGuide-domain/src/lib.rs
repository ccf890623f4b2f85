// WellnessGuide Domain
// This crate contains the business logic for the WellnessGuide application

// Completion relay: prompt, upstream client, reply extraction, fallbacks
pub mod relay;

// Services that implement business logic
pub mod services;

// Authentication
pub mod auth;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the database module from the data layer for convenience
pub use wellness_guide_data::database;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
