use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        coffee::{CoffeeDto, CreateCoffeeDto, PaginationQueryDto, UpdateCoffeeDto},
    },
    server::{
        error::AppError,
        model::{
            coffee::{CreateCoffeeParams, UpdateCoffeeParams},
            pagination::PaginationParams,
        },
        service::coffee::CoffeeService,
        state::AppState,
    },
};

/// Tag for grouping coffee endpoints in OpenAPI documentation
pub static COFFEE_TAG: &str = "coffee";

/// Placeholder body returned by the flavors endpoint.
pub static FLAVORS_PLACEHOLDER: &str = "This action returns all coffee flavors";

/// Get a page of coffees.
///
/// Returns coffees in creation order with their flavors. `offset` skips records from
/// the start and `limit` caps the number returned; an offset past the end yields an
/// empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Pagination parameters (limit and offset)
///
/// # Returns
/// - `200 OK` - List of coffees
/// - `400 Bad Request` - Negative or non-numeric pagination parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/coffees",
    tag = COFFEE_TAG,
    params(PaginationQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved coffees", body = Vec<CoffeeDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coffees(
    State(state): State<AppState>,
    query: Result<Query<PaginationQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = CoffeeService::new(&state.db);

    let coffees = service
        .find_all(PaginationParams::from_dto(query))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            coffees
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Placeholder listing of coffee flavors.
#[utoipa::path(
    get,
    path = "/coffees/flavors",
    tag = COFFEE_TAG,
    responses(
        (status = 200, description = "Placeholder text", body = String)
    ),
)]
pub async fn get_flavors() -> impl IntoResponse {
    (StatusCode::OK, FLAVORS_PLACEHOLDER)
}

/// Get a specific coffee by ID.
///
/// # Returns
/// - `200 OK` - Coffee with its flavors
/// - `400 Bad Request` - Non-numeric ID
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/coffees/{id}",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee ID", body = ErrorDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coffee(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = CoffeeService::new(&state.db);

    let coffee = service.find_one(id).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// Create a new coffee.
///
/// Flavors are given by name. Existing flavors are reused and missing ones are
/// created, so a flavor name is never stored twice.
///
/// # Returns
/// - `201 Created` - Successfully created coffee
/// - `400 Bad Request` - Malformed body, unknown fields or blank values
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/coffees",
    tag = COFFEE_TAG,
    request_body = CreateCoffeeDto,
    responses(
        (status = 201, description = "Successfully created coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coffee(
    State(state): State<AppState>,
    payload: Result<Json<CreateCoffeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    // Convert DTO to server model
    let params = CreateCoffeeParams::from_dto(payload)?;

    let service = CoffeeService::new(&state.db);

    let coffee = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(coffee.into_dto())))
}

/// Partially update a coffee.
///
/// Omitted fields keep their current value. A provided `flavors` list replaces the
/// coffee's whole flavor set.
///
/// # Returns
/// - `200 OK` - Successfully updated coffee
/// - `400 Bad Request` - Malformed body, unknown fields or blank values
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/coffees/{id}",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    request_body = UpdateCoffeeDto,
    responses(
        (status = 200, description = "Successfully updated coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee data", body = ErrorDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_coffee(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCoffeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let params = UpdateCoffeeParams::from_dto(id, payload)?;

    let service = CoffeeService::new(&state.db);

    let coffee = service.update(params).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// Delete a coffee.
///
/// # Returns
/// - `200 OK` - The deleted coffee
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/coffees/{id}",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee ID", body = ErrorDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coffee(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = CoffeeService::new(&state.db);

    let coffee = service.remove(id).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// Recommend a coffee.
///
/// Increments the coffee's recommendation counter and records a `recommend_coffee`
/// event in the same transaction.
///
/// # Returns
/// - `200 OK` - Coffee with the incremented counter
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/coffees/{id}/recommend",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Successfully recommended coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee ID", body = ErrorDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recommend_coffee(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = CoffeeService::new(&state.db);

    let coffee = service.recommend(id).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}
