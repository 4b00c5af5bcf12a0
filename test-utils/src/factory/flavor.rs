//! Flavor factory for creating test flavor entities and coffee/flavor links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flavors with customizable fields.
///
/// Flavor names are unique, so the default name carries an auto-incremented suffix.
pub struct FlavorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> FlavorFactory<'a> {
    /// Creates a new FlavorFactory with default name `"Flavor {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Flavor {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the flavor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flavor::Model)` - Created flavor entity
    /// - `Err(DbErr)` - Database error during insert (including duplicate names)
    pub async fn build(self) -> Result<entity::flavor::Model, DbErr> {
        entity::flavor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flavor with a unique default name.
pub async fn create_flavor(db: &DatabaseConnection) -> Result<entity::flavor::Model, DbErr> {
    FlavorFactory::new(db).build().await
}

/// Links an existing flavor to an existing coffee.
///
/// # Arguments
/// - `db` - Database connection
/// - `coffee_id` - ID of the coffee
/// - `flavor_id` - ID of the flavor
///
/// # Returns
/// - `Ok(entity::coffee_flavor::Model)` - Created join row
/// - `Err(DbErr)` - Database error, e.g. the link already exists
pub async fn attach_flavor(
    db: &DatabaseConnection,
    coffee_id: i32,
    flavor_id: i32,
) -> Result<entity::coffee_flavor::Model, DbErr> {
    entity::coffee_flavor::ActiveModel {
        coffee_id: ActiveValue::Set(coffee_id),
        flavor_id: ActiveValue::Set(flavor_id),
    }
    .insert(db)
    .await
}
