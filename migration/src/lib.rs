pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_coffee_table;
mod m20251001_000002_create_flavor_table;
mod m20251001_000003_create_coffee_flavor_table;
mod m20251008_000004_create_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_coffee_table::Migration),
            Box::new(m20251001_000002_create_flavor_table::Migration),
            Box::new(m20251001_000003_create_coffee_flavor_table::Migration),
            Box::new(m20251008_000004_create_event_table::Migration),
        ]
    }
}
