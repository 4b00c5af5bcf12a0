//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let coffee = factory::create_coffee(&db).await?;
//!     let flavor = factory::create_flavor(&db).await?;
//!     factory::attach_flavor(&db, coffee.id, flavor.id).await?;
//!
//!     // Or all at once
//!     let (coffee, flavors) =
//!         factory::helpers::create_coffee_with_flavors(&db, &["vanilla", "chocolate"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `coffee` - Create coffee entities
//! - `flavor` - Create flavor entities and coffee/flavor join rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod coffee;
pub mod flavor;
pub mod helpers;

pub use coffee::create_coffee;
pub use flavor::{attach_flavor, create_flavor};
