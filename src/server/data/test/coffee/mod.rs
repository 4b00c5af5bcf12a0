mod get_by_id;
mod update;

use crate::server::{
    data::coffee::CoffeeRepository, error::AppError, model::pagination::PaginationParams,
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
