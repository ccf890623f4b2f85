//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use wellness_guide_data::database;

use crate::relay::CompletionClient;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the database
    async fn check_database_status(&self) -> Result<bool, String>;
}

/// Check if the database is available and functioning properly
///
/// Returns:
/// - Ok(true) if the database is fully operational
/// - Ok(false) if the database has degraded functionality
/// - Err if the database is completely unavailable
pub async fn check_database_status() -> Result<bool, String> {
    match database::get_connection_info() {
        Some(info) => Ok(info.contains("healthy")),
        None => match database::get_db_pool() {
            Ok(_) => Ok(true),
            Err(e) => Err(format!("Database connection error: {}", e)),
        },
    }
}

fn database_component(status: Result<bool, String>) -> HealthComponent {
    match status {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Database is available but reported a connection problem".to_string()),
        },
        // Records fall back to in-memory storage, so the service still works
        Err(e) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!("{}; using in-memory storage", e)),
        },
    }
}

fn completion_component(client: &dyn CompletionClient) -> HealthComponent {
    if client.is_configured() {
        HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        }
    } else {
        HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Completion API key is not configured; relay answers with fallbacks".to_string()),
        }
    }
}

/// Overall status is the worst component status
fn overall_status(components: &HashMap<String, HealthComponent>) -> SystemStatus {
    if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
        SystemStatus::Unhealthy
    } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}

/// Health service covering storage and the completion API
#[derive(Clone)]
pub struct HealthService {
    client: Arc<dyn CompletionClient>,
}

impl fmt::Debug for HealthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthService")
            .field("completion_configured", &self.client.is_configured())
            .finish()
    }
}

impl HealthService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let components: HashMap<String, HealthComponent> = [
            ("database".to_string(), database_component(self.check_database_status().await)),
            ("completion_api".to_string(), completion_component(self.client.as_ref())),
        ]
        .into_iter()
        .collect();

        SystemHealth {
            status: overall_status(&components),
            components,
        }
    }

    async fn check_database_status(&self) -> Result<bool, String> {
        check_database_status().await
    }
}
