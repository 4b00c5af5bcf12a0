use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{coffee::CoffeeRepository, event::EventRepository, flavor::FlavorRepository},
    error::AppError,
    model::{
        coffee::{Coffee, CreateCoffeeParams, UpdateCoffeeParams},
        event::CreateEventParams,
        flavor::Flavor,
        pagination::PaginationParams,
    },
};

pub struct CoffeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoffeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of coffees in creation order
    pub async fn find_all(&self, pagination: PaginationParams) -> Result<Vec<Coffee>, AppError> {
        let coffees = CoffeeRepository::new(self.db)
            .get_paginated(pagination)
            .await?;

        tracing::debug!(
            "Fetched {} coffees (offset {}, limit {:?})",
            coffees.len(),
            pagination.offset,
            pagination.limit
        );

        Ok(coffees)
    }

    /// Gets a coffee by ID, failing with `NotFound` when it doesn't exist
    pub async fn find_one(&self, id: i32) -> Result<Coffee, AppError> {
        CoffeeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a coffee, attaching existing flavors by name and creating missing ones
    pub async fn create(&self, params: CreateCoffeeParams) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;

        let flavors = preload_flavors_by_name(&txn, &params.flavors).await?;
        let flavor_ids: Vec<i32> = flavors.iter().map(|f| f.id).collect();

        let coffee = CoffeeRepository::new(&txn)
            .create(params.name, params.brand, &flavor_ids)
            .await?;

        txn.commit().await?;

        tracing::info!("Created coffee #{} '{}'", coffee.id, coffee.name);

        Ok(coffee)
    }

    /// Applies a partial update to a coffee.
    ///
    /// Only the fields present in `params` change. Provided flavors replace the
    /// coffee's whole flavor set.
    pub async fn update(&self, params: UpdateCoffeeParams) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;
        let repo = CoffeeRepository::new(&txn);

        if repo.get_by_id(params.id).await?.is_none() {
            return Err(not_found(params.id));
        }

        let flavor_ids = match &params.flavors {
            Some(names) => Some(
                preload_flavors_by_name(&txn, names)
                    .await?
                    .iter()
                    .map(|f| f.id)
                    .collect::<Vec<_>>(),
            ),
            None => None,
        };

        let coffee = repo
            .update(params.id, params.name, params.brand, flavor_ids.as_deref())
            .await?;

        txn.commit().await?;

        tracing::info!("Updated coffee #{}", coffee.id);

        Ok(coffee)
    }

    /// Deletes a coffee and returns the deleted record
    pub async fn remove(&self, id: i32) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;
        let repo = CoffeeRepository::new(&txn);

        let coffee = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Removed coffee #{}", id);

        Ok(coffee)
    }

    /// Returns the flavor with the given name, creating it if it doesn't exist.
    ///
    /// Public entry point to the lookup `create` and `update` run for each flavor name.
    /// This one runs directly on the pool; they run it inside their own transaction.
    pub async fn preload_flavor_by_name(&self, name: &str) -> Result<Flavor, AppError> {
        Ok(preload_flavor_by_name(self.db, name).await?)
    }

    /// Increments a coffee's recommendation counter and records a recommendation event.
    ///
    /// Both writes share one transaction: it commits only when every step succeeds and
    /// rolls back when dropped on any early return.
    pub async fn recommend(&self, id: i32) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;
        let repo = CoffeeRepository::new(&txn);

        if !repo.increment_recommendations(id).await? {
            return Err(not_found(id));
        }

        EventRepository::new(&txn)
            .create(CreateEventParams::recommend_coffee(id))
            .await?;

        let coffee = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        tracing::info!(
            "Recommended coffee #{} ({} recommendations)",
            id,
            coffee.recommendations
        );

        Ok(coffee)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Coffee #{} not found", id))
}

async fn preload_flavor_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Flavor, DbErr> {
    let repo = FlavorRepository::new(db);

    match repo.find_by_name(name).await? {
        Some(flavor) => Ok(flavor),
        None => {
            let flavor = repo.create(name.to_string()).await?;
            tracing::debug!("Created flavor #{} '{}'", flavor.id, flavor.name);
            Ok(flavor)
        }
    }
}

/// Resolves each distinct name once, keeping first-seen order
async fn preload_flavors_by_name<C: ConnectionTrait>(
    db: &C,
    names: &[String],
) -> Result<Vec<Flavor>, DbErr> {
    let mut flavors: Vec<Flavor> = Vec::with_capacity(names.len());

    for name in names {
        if flavors.iter().any(|f| &f.name == name) {
            continue;
        }
        flavors.push(preload_flavor_by_name(db, name).await?);
    }

    Ok(flavors)
}
