/*
 * Responsibility
 * - /products v1 の read handler (list / get-by-id)
 * - Path を extractor で受け、id validation → store 呼び出し → DTO projection
 * - 認可は Authorized<ReaderPolicy> が handler 実行前に評価する
 */
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    api::extractors::{Authorized, ReaderPolicy},
    api::v1::dto::products::ProductResponse,
    error::AppError,
    state::AppState,
};

pub async fn list_products(
    State(state): State<AppState>,
    _auth: Authorized<ReaderPolicy>,
    Path(culture): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    tracing::debug!(%culture, "listing products (v1)");

    let products = state.store.find_all().await?;
    let res = products.into_iter().map(ProductResponse::from).collect();

    Ok(Json(res))
}

pub async fn get_product(
    State(state): State<AppState>,
    _auth: Authorized<ReaderPolicy>,
    Path((culture, id)): Path<(String, Uuid)>,
) -> Result<Json<ProductResponse>, AppError> {
    // A nil UUID parses fine but is never a real id.
    if id.is_nil() {
        return Err(AppError::validation(vec![
            "id must be a non-nil UUID".to_string(),
        ]));
    }

    tracing::debug!(%culture, %id, "fetching product (v1)");

    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(id))?;

    Ok(Json(product.into()))
}
