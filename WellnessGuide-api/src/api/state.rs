use std::sync::Arc;

use wellness_guide_data::database::DatabasePool;
use wellness_guide_data::repository::{ChatRepository, MoodRepository, SymptomCheckRepository, TipRepository};
use wellness_guide_domain::health::{HealthService, HealthServiceTrait};
use wellness_guide_domain::relay::{ChatRelay, CompletionClient, SymptomRelay};
use wellness_guide_domain::services::{
    create_default_chat_service, create_default_mood_service, create_default_symptom_check_service,
    create_default_tip_service, ChatService, ChatServiceTrait, MoodService, MoodServiceTrait,
    SymptomCheckService, SymptomCheckServiceTrait, TipService, TipServiceTrait,
};

/// Shared services handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub symptom_relay: SymptomRelay,
    pub chat_relay: ChatRelay,
    pub symptom_checks: Arc<dyn SymptomCheckServiceTrait>,
    pub chat: Arc<dyn ChatServiceTrait>,
    pub moods: Arc<dyn MoodServiceTrait>,
    pub tips: Arc<dyn TipServiceTrait>,
    pub health: Arc<dyn HealthServiceTrait>,
}

impl AppState {
    /// Services backed by the global database pool, or memory without one
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        let symptom_relay = SymptomRelay::new(client.clone());
        let chat_relay = ChatRelay::new(client.clone());

        Self {
            symptom_checks: Arc::new(create_default_symptom_check_service(symptom_relay.clone())),
            chat: Arc::new(create_default_chat_service(chat_relay.clone())),
            moods: Arc::new(create_default_mood_service()),
            tips: Arc::new(create_default_tip_service()),
            health: Arc::new(HealthService::new(client)),
            symptom_relay,
            chat_relay,
        }
    }

    /// Services backed by a specific pool
    pub fn with_pool(client: Arc<dyn CompletionClient>, pool: DatabasePool) -> Self {
        let symptom_relay = SymptomRelay::new(client.clone());
        let chat_relay = ChatRelay::new(client.clone());

        Self {
            symptom_checks: Arc::new(SymptomCheckService::new(
                SymptomCheckRepository::with_pool(pool.clone()),
                symptom_relay.clone(),
            )),
            chat: Arc::new(ChatService::new(ChatRepository::with_pool(pool.clone()), chat_relay.clone())),
            moods: Arc::new(MoodService::new(MoodRepository::with_pool(pool.clone()))),
            tips: Arc::new(TipService::new(TipRepository::with_pool(pool))),
            health: Arc::new(HealthService::new(client)),
            symptom_relay,
            chat_relay,
        }
    }
}
