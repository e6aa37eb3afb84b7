/*
 * Responsibility
 * - v2 の URL 構造を定義
 * - read は Reader policy、create は Editor policy (handler 側の Authorized<P>)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::bearer_auth;
use crate::state::AppState;

use crate::api::v2::handlers::products::{create_product, get_product, list_products};

pub fn routes(state: AppState) -> Router<AppState> {
    let products = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product));

    bearer_auth::apply(products, state)
}
