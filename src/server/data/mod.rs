//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees entity types. Every repository is generic over
//! `ConnectionTrait`, so the same code runs against the connection pool or inside a
//! transaction opened by the service.

pub mod coffee;
pub mod event;
pub mod flavor;
