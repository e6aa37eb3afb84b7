/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /products (read, Reader policy) と /login を merge
 * - Bearer が必要な範囲をここで決める
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::bearer_auth;
use crate::state::AppState;

use crate::api::v1::handlers::{
    login::login,
    products::{get_product, list_products},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let products = Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product));
    // Policy evaluation (Authorized<ReaderPolicy>) sits in the handler
    // signatures; bearer_auth must wrap the routes so the Principal
    // exists by the time the extractor runs.
    let products = bearer_auth::apply(products, state);

    Router::new()
        .route("/login/{role}", post(login))
        .merge(products)
}
