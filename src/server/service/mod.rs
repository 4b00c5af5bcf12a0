//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Flavor deduplication, partial update semantics, not-found handling
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Transaction Management**: Opening a transaction for every multi-statement write

pub mod coffee;
