//! SeaORM entity definitions for the coffee catalogue.
//!
//! `coffee` and `flavor` are linked many-to-many through the `coffee_flavor`
//! join table. `event` records domain events such as recommendations.

pub mod prelude;

pub mod coffee;
pub mod coffee_flavor;
pub mod event;
pub mod flavor;
