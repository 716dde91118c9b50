//! Inventory actions: view/search, add, update, delete.
//!
//! Every handler runs one load → mutate → save cycle through an
//! [`InventorySession`] on the blocking pool; read-only handlers never save.
//! Extractor rejections come back as `ApiError` so every failure shares the
//! JSON error body.

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use weldstock_core::DomainError;
use weldstock_infra::InventorySession;
use weldstock_inventory::Category;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(view_inventory))
        .route("/products", get(list_products))
        .route("/categories", get(list_categories))
        .route("/items", post(add_item))
        .route(
            "/items/:product",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Whole-table summary plus the (optionally filtered) rows and their
/// low-stock subset.
pub async fn view_inventory(
    Extension(services): Extension<AppServices>,
    query: Result<Query<dto::ViewQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let threshold = services.low_stock_threshold();

    let body = services
        .with_store(move |store| {
            let session = InventorySession::begin(store)?;
            let table = session.table();
            let filter = query.q.as_deref();

            Ok(json!({
                "summary": table.aggregate(),
                "filter": filter,
                "items": dto::records_to_json(table.list(filter)),
                "low_stock_threshold": threshold,
                "low_stock": dto::records_to_json(table.low_stock(filter, threshold)),
            }))
        })
        .await?;

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Names offered for edit/delete; empty when there is nothing to manage.
pub async fn list_products(
    Extension(services): Extension<AppServices>,
) -> Result<Response, ApiError> {
    let names = services
        .with_store(|store| {
            let session = InventorySession::begin(store)?;
            let names: Vec<String> = session
                .table()
                .product_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            Ok(names)
        })
        .await?;

    Ok((StatusCode::OK, Json(json!({ "products": names }))).into_response())
}

pub async fn list_categories() -> Response {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
    (StatusCode::OK, Json(json!({ "categories": labels }))).into_response()
}

/// First row with this name, used to pre-fill the edit form.
pub async fn get_item(
    Extension(services): Extension<AppServices>,
    product: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(product) = product?;

    let record = services
        .with_store(move |store| {
            let session = InventorySession::begin(store)?;
            let record = session
                .table()
                .first_match(&product)
                .ok_or_else(|| DomainError::not_found(product.as_str()))?;
            Ok(dto::record_to_json(record))
        })
        .await?;

    Ok((StatusCode::OK, Json(record)).into_response())
}

pub async fn add_item(
    Extension(services): Extension<AppServices>,
    body: Result<Json<dto::AddItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let new = body.into_new_record()?;

    let (added, summary) = services
        .with_store(move |store| {
            let mut session = InventorySession::begin(store)?;
            let added = session.table_mut().add(new)?.clone();
            let table = session.commit()?;
            Ok((added, table.aggregate()))
        })
        .await?;

    tracing::info!(product = %added.product, quantity = added.quantity, price = added.price, "item added");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "saved",
            "item": dto::record_to_json(&added),
            "summary": summary,
        })),
    )
        .into_response())
}

/// Sets quantity and price on every row with this name.
pub async fn update_item(
    Extension(services): Extension<AppServices>,
    product: Result<Path<String>, PathRejection>,
    body: Result<Json<dto::UpdateItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(product) = product?;
    let Json(body) = body?;

    let name = product.clone();
    let (updated, summary) = services
        .with_store(move |store| {
            let mut session = InventorySession::begin(store)?;
            let updated = session.table_mut().update(&name, body.quantity, body.price)?;
            let table = session.commit()?;
            Ok((updated, table.aggregate()))
        })
        .await?;

    tracing::info!(%product, updated, "items updated");

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "updated",
            "product": product,
            "updated": updated,
            "summary": summary,
        })),
    )
        .into_response())
}

/// Removes every row with this name.
pub async fn delete_item(
    Extension(services): Extension<AppServices>,
    product: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(product) = product?;

    let name = product.clone();
    let (deleted, summary) = services
        .with_store(move |store| {
            let mut session = InventorySession::begin(store)?;
            let deleted = session.table_mut().delete(&name)?;
            let table = session.commit()?;
            Ok((deleted, table.aggregate()))
        })
        .await?;

    tracing::info!(%product, deleted, "items deleted");

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "deleted",
            "product": product,
            "deleted": deleted,
            "summary": summary,
        })),
    )
        .into_response())
}
