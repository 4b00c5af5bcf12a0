mod recommend_coffee;

use axum::{
    body::Body,
    extract::{FromRequest, Path, Query, State},
    http::{header, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::coffee::{CoffeeDto, CreateCoffeeDto, PaginationQueryDto, UpdateCoffeeDto},
    server::{controller::coffee::*, error::AppError, state::AppState},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Reads a JSON response body.
async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Runs the JSON extractor over a raw request body.
async fn json_body<T: DeserializeOwned>(
    body: &str,
) -> Result<Json<T>, axum::extract::rejection::JsonRejection> {
    let request = Request::builder()
        .method("POST")
        .uri("/coffees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    Json::<T>::from_request(request, &()).await
}
