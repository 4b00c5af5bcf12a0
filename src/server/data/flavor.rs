//! Flavor data repository.
//!
//! Flavors are unique by name; the store enforces this with a unique index, and
//! callers resolve names through `find_by_name` before falling back to `create`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::flavor::Flavor;

pub struct FlavorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlavorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new flavor.
    ///
    /// # Returns
    /// - `Ok(Flavor)` - The created flavor with generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation when the name exists
    pub async fn create(&self, name: String) -> Result<Flavor, DbErr> {
        let entity = entity::flavor::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flavor::from_entity(entity))
    }

    /// Finds a flavor by exact name match.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Flavor>, DbErr> {
        let entity = entity::prelude::Flavor::find()
            .filter(entity::flavor::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Flavor::from_entity))
    }

    /// Gets the flavors linked to each of the given coffees.
    ///
    /// Coffees without flavors are absent from the returned map. Flavors for each
    /// coffee are ordered by flavor ID.
    ///
    /// # Arguments
    /// - `coffee_ids` - IDs of the coffees to load flavors for
    ///
    /// # Returns
    /// - `Ok(HashMap<coffee_id, flavors>)` - Flavors grouped by coffee
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_coffee_ids(
        &self,
        coffee_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Flavor>>, DbErr> {
        if coffee_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::CoffeeFlavor::find()
            .filter(entity::coffee_flavor::Column::CoffeeId.is_in(coffee_ids.to_vec()))
            .order_by_asc(entity::coffee_flavor::Column::FlavorId)
            .find_also_related(entity::prelude::Flavor)
            .all(self.db)
            .await?;

        let mut flavors: HashMap<i32, Vec<Flavor>> = HashMap::new();
        for (link, flavor) in links {
            if let Some(flavor) = flavor {
                flavors
                    .entry(link.coffee_id)
                    .or_default()
                    .push(Flavor::from_entity(flavor));
            }
        }

        Ok(flavors)
    }
}
