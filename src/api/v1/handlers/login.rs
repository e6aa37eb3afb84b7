/*
 * Responsibility
 * - デモ用 login handler: 指定 role の claim を持つ access token を発行する
 * - 認証不要 (token の供給源なので)
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::v1::dto::token::TokenResponse, error::AppError, services::auth::policy::Role,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Path((culture, role)): Path<(String, String)>,
) -> Result<Json<TokenResponse>, AppError> {
    let role: Role = role
        .parse()
        .map_err(|_| AppError::validation(vec![format!("unknown role '{role}'")]))?;

    let subject = format!("{}@demo", role.as_claim().to_ascii_lowercase());
    let access_token = state.issuer.issue(&subject, &[role])?;

    tracing::info!(%culture, role = role.as_claim(), "issued demo token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.issuer.ttl_seconds(),
    }))
}
