//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so neither SeaORM entities nor API
//! types leak into the service layer.

pub mod coffee;
pub mod event;
pub mod flavor;
pub mod pagination;
