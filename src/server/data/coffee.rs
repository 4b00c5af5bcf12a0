//! Coffee data repository for database operations.
//!
//! This module provides the `CoffeeRepository` for managing coffee records and their
//! flavor links in the `coffee_flavor` join table. Coffees are always returned with
//! their flavors loaded.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::flavor::FlavorRepository,
    model::{coffee::Coffee, pagination::PaginationParams},
};

/// Repository providing database operations for coffees.
pub struct CoffeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoffeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new coffee linked to the given flavors.
    ///
    /// The recommendation counter starts at the column default of 0.
    ///
    /// # Arguments
    /// - `name` - Coffee name
    /// - `brand` - Coffee brand
    /// - `flavor_ids` - IDs of existing flavors to link; must not contain duplicates
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The created coffee with its flavors
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        name: String,
        brand: String,
        flavor_ids: &[i32],
    ) -> Result<Coffee, DbErr> {
        let coffee = entity::coffee::ActiveModel {
            name: ActiveValue::Set(name),
            brand: ActiveValue::Set(brand),
            recommendations: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.link_flavors(coffee.id, flavor_ids).await?;

        self.load(coffee).await
    }

    /// Gets a coffee by ID with its flavors.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Coffee>, DbErr> {
        let coffee = entity::prelude::Coffee::find_by_id(id).one(self.db).await?;

        match coffee {
            Some(coffee) => Ok(Some(self.load(coffee).await?)),
            None => Ok(None),
        }
    }

    /// Gets a page of coffees in insertion order.
    ///
    /// Coffees are ordered by ascending ID, which matches creation order. An offset
    /// past the end yields an empty list.
    ///
    /// # Arguments
    /// - `pagination` - Offset/limit window to apply
    ///
    /// # Returns
    /// - `Ok(Vec<Coffee>)` - Coffees in the window with their flavors
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, pagination: PaginationParams) -> Result<Vec<Coffee>, DbErr> {
        let query = entity::prelude::Coffee::find().order_by_asc(entity::coffee::Column::Id);
        let coffees = pagination.apply(query).all(self.db).await?;

        let ids: Vec<i32> = coffees.iter().map(|c| c.id).collect();
        let mut flavors = FlavorRepository::new(self.db).get_by_coffee_ids(&ids).await?;

        Ok(coffees
            .into_iter()
            .map(|coffee| {
                let coffee_flavors = flavors.remove(&coffee.id).unwrap_or_default();
                Coffee::from_entity(coffee, coffee_flavors)
            })
            .collect())
    }

    /// Updates a coffee's fields and, optionally, its whole flavor set.
    ///
    /// # Arguments
    /// - `id` - ID of the coffee to update
    /// - `name` - New name, or `None` to keep the current one
    /// - `brand` - New brand, or `None` to keep the current one
    /// - `flavor_ids` - Replacement flavor set, or `None` to keep the current links
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The updated coffee with its flavors
    /// - `Err(DbErr::RecordNotFound)` - No coffee exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        brand: Option<String>,
        flavor_ids: Option<&[i32]>,
    ) -> Result<Coffee, DbErr> {
        let coffee = entity::prelude::Coffee::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Coffee with id {} not found",
                id
            )))?;

        let coffee = if name.is_some() || brand.is_some() {
            let mut active_model: entity::coffee::ActiveModel = coffee.into();
            if let Some(name) = name {
                active_model.name = ActiveValue::Set(name);
            }
            if let Some(brand) = brand {
                active_model.brand = ActiveValue::Set(brand);
            }

            active_model.update(self.db).await?
        } else {
            coffee
        };

        if let Some(flavor_ids) = flavor_ids {
            entity::prelude::CoffeeFlavor::delete_many()
                .filter(entity::coffee_flavor::Column::CoffeeId.eq(id))
                .exec(self.db)
                .await?;

            self.link_flavors(id, flavor_ids).await?;
        }

        self.load(coffee).await
    }

    /// Deletes a coffee and its flavor links.
    ///
    /// Flavors themselves are kept even when no coffee references them anymore.
    ///
    /// # Returns
    /// - `Ok(())` - Coffee deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::CoffeeFlavor::delete_many()
            .filter(entity::coffee_flavor::Column::CoffeeId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Coffee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Increments a coffee's recommendation counter by one.
    ///
    /// The increment is a single `recommendations = recommendations + 1` statement, so
    /// concurrent callers never overwrite each other's increments.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No coffee exists with the specified ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_recommendations(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Coffee::update_many()
            .col_expr(
                entity::coffee::Column::Recommendations,
                Expr::col(entity::coffee::Column::Recommendations).add(1),
            )
            .filter(entity::coffee::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn link_flavors(&self, coffee_id: i32, flavor_ids: &[i32]) -> Result<(), DbErr> {
        for flavor_id in flavor_ids {
            entity::coffee_flavor::ActiveModel {
                coffee_id: ActiveValue::Set(coffee_id),
                flavor_id: ActiveValue::Set(*flavor_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn load(&self, coffee: entity::coffee::Model) -> Result<Coffee, DbErr> {
        let mut flavors = FlavorRepository::new(self.db)
            .get_by_coffee_ids(&[coffee.id])
            .await?;
        let coffee_flavors = flavors.remove(&coffee.id).unwrap_or_default();

        Ok(Coffee::from_entity(coffee, coffee_flavors))
    }
}
