//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a coffee and attaches a newly created flavor for each name.
///
/// # Arguments
/// - `db` - Database connection
/// - `flavor_names` - Names of the flavors to create and attach
///
/// # Returns
/// - `Ok((coffee, flavors))` - The coffee and its flavors in the given order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_coffee_with_flavors(
    db: &DatabaseConnection,
    flavor_names: &[&str],
) -> Result<(entity::coffee::Model, Vec<entity::flavor::Model>), DbErr> {
    let coffee = crate::factory::coffee::create_coffee(db).await?;

    let mut flavors = Vec::with_capacity(flavor_names.len());
    for name in flavor_names {
        let flavor = crate::factory::flavor::FlavorFactory::new(db)
            .name(*name)
            .build()
            .await?;
        crate::factory::flavor::attach_flavor(db, coffee.id, flavor.id).await?;
        flavors.push(flavor);
    }

    Ok((coffee, flavors))
}
