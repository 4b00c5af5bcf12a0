mod find_by_name;
mod get_by_coffee_ids;

use crate::server::{data::flavor::FlavorRepository, error::AppError};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
