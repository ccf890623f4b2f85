// WellnessGuide Data
// This crate handles record storage for the wellness panels

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
