use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::coffee, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "iluvcoffee", description = "Coffee catalogue API"),
    tags((name = "coffee", description = "Coffees and their flavors"))
)]
struct ApiDoc;

/// Builds the API router and mounts Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(coffee::get_coffees, coffee::create_coffee))
        .routes(routes!(coffee::get_flavors))
        .routes(routes!(
            coffee::get_coffee,
            coffee::update_coffee,
            coffee::delete_coffee
        ))
        .routes(routes!(coffee::recommend_coffee))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
