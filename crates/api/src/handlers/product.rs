//! Handlers for the `/products` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::pagination::{Paginated, Pagination};
use catalog_core::product::{validate_price, validate_product_name};
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};

use crate::error::AppResult;
use crate::state::AppState;

/// Validate product creation input (name + price).
fn validate_create_input(input: &CreateProduct) -> AppResult<()> {
    validate_product_name(&input.name)?;
    validate_price(input.price)?;
    Ok(())
}

/// Validate the supplied fields of a product patch.
fn validate_update_input(input: &UpdateProduct) -> AppResult<()> {
    if let Some(ref name) = input.name {
        validate_product_name(name)?;
    }
    if let Some(price) = input.price {
        validate_price(price)?;
    }
    Ok(())
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(input) = payload?;
    validate_create_input(&input)?;

    let product = state.catalog.create(&input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<Pagination>, QueryRejection>,
) -> AppResult<Json<Paginated<Product>>> {
    let Query(pagination) = params?;
    pagination.validate()?;

    let page = state.catalog.list(&pagination).await?;
    Ok(Json(page))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get_by_id(id).await?;
    Ok(Json(product))
}

/// PATCH /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(input) = payload?;
    validate_update_input(&input)?;

    if input.id.is_some_and(|body_id| body_id != id) {
        tracing::debug!(product_id = id, body_id = ?input.id, "Ignoring id in patch body");
    }

    let product = state.catalog.update(id, input).await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
///
/// Responds with the removed product: deactivated under soft deletion, or
/// its final state under hard deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.remove(id).await?;
    Ok(Json(product))
}
