/*
 * Responsibility
 * - Bearer トークンの検証 (ヘッダ抽出 → 検証 → 拒否)
 * - 成功時に、認証済み主体 (Principal) を request extensions に載せる
 * - 認可 (Authorization) は extractor (Authorized<P>) 側で行う
 */
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Apply bearer authentication to a (sub-)router.
///
/// Every request passing through gets a verified [`Principal`] in its
/// extensions, or a 401 before any handler runs.
///
/// [`Principal`]: crate::services::auth::Principal
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, bearer_middleware))
}

async fn bearer_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

    // Signature + iss/aud/exp (zero leeway) checks happen in AuthService.
    let principal = match state.auth.verify_principal(token) {
        Ok(principal) => principal,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                "access token verification failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
