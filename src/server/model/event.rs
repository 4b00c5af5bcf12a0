use chrono::{DateTime, Utc};

/// Event type shared by all coffee events.
pub const COFFEE_EVENT_TYPE: &str = "coffee";

/// Event name written each time a coffee is recommended.
pub const RECOMMEND_COFFEE_EVENT: &str = "recommend_coffee";

/// A persisted domain event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub event_type: String,
    pub name: String,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            event_type: entity.event_type,
            name: entity.name,
            payload: entity.payload,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording a new event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub event_type: String,
    pub name: String,
    pub payload: serde_json::Value,
}

impl CreateEventParams {
    /// Builds the event recorded when a coffee is recommended.
    pub fn recommend_coffee(coffee_id: i32) -> Self {
        Self {
            event_type: COFFEE_EVENT_TYPE.to_string(),
            name: RECOMMEND_COFFEE_EVENT.to_string(),
            payload: serde_json::json!({ "coffeeId": coffee_id }),
        }
    }
}
