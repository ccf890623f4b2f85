// HTTP handlers, one module per resource
pub mod chat;
pub mod health;
pub mod moods;
pub mod relay;
pub mod symptom_checks;
pub mod tips;

pub use health::initialize_server_start_time;
