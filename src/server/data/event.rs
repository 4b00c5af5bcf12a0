use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::event::{CreateEventParams, Event};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a new event stamped with the current time.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            event_type: ActiveValue::Set(params.event_type),
            name: ActiveValue::Set(params.name),
            payload: ActiveValue::Set(params.payload),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }
}
