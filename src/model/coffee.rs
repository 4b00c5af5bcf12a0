use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CoffeeDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub recommendations: i32,
    pub flavors: Vec<FlavorDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlavorDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCoffeeDto {
    pub name: String,
    pub brand: String,
    pub flavors: Vec<String>,
}

/// Partial update; omitted fields keep their current value.
///
/// `flavors`, when present, replaces the whole flavor set.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCoffeeDto {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub flavors: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQueryDto {
    /// Maximum number of records to return (default: all)
    pub limit: Option<u64>,
    /// Number of records to skip (default: 0)
    pub offset: Option<u64>,
}
