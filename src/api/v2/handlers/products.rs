/*
 * Responsibility
 * - /products v2 の handler (list / get-by-id / create)
 * - v2 read は slim projection、create は Editor policy が必要
 * - create の Location は必ず v2 の get-by-id を指す (ApiVersion 経由で生成)
 */
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    api::extractors::{Authorized, EditorPolicy, ReaderPolicy},
    api::v2::dto::products::{CreateProductRequest, ProductResponse},
    api::version::ApiVersion,
    error::AppError,
    repos::store::Product,
    state::AppState,
};

const VERSION: ApiVersion = ApiVersion::V2;

pub async fn list_products(
    State(state): State<AppState>,
    _auth: Authorized<ReaderPolicy>,
    Path(culture): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    tracing::debug!(%culture, "listing products (v2)");

    let products = state.store.find_all().await?;
    let res = products.into_iter().map(ProductResponse::from).collect();

    Ok(Json(res))
}

pub async fn get_product(
    State(state): State<AppState>,
    _auth: Authorized<ReaderPolicy>,
    Path((culture, id)): Path<(String, Uuid)>,
) -> Result<Json<ProductResponse>, AppError> {
    if id.is_nil() {
        return Err(AppError::validation(vec![
            "id must be a non-nil UUID".to_string(),
        ]));
    }

    tracing::debug!(%culture, %id, "fetching product (v2)");

    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(id))?;

    Ok(Json(product.into()))
}

pub async fn create_product(
    State(state): State<AppState>,
    auth: Authorized<EditorPolicy>,
    Path(culture): Path<String>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let valid = req
        .validate()
        .map_err(|messages| AppError::Validation { messages })?;

    // Simulated-latency hook. Off unless CREATE_DELAY_MS is configured.
    if let Some(delay) = state.create_delay {
        tokio::time::sleep(delay).await;
    }

    let product = Product {
        id: valid.id.unwrap_or_else(Uuid::new_v4),
        name: valid.name,
        description: valid.description,
        price: valid.price,
    };

    let created = state.store.insert(product).await?;

    tracing::info!(
        subject = %auth.principal.subject,
        id = %created.id,
        "product created"
    );

    let location = VERSION.product_location(&culture, created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(created)),
    ))
}
