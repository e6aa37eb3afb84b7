/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - store / auth / issuer / policies は起動時に固定、以後 read-only
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;
use std::time::Duration;

use crate::repos::store::ProductStore;
use crate::services::auth::policy::PolicySet;
use crate::services::auth::{AuthService, TokenIssuer};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub auth: Arc<AuthService>,
    pub issuer: Arc<TokenIssuer>,
    pub policies: Arc<PolicySet>,
    pub create_delay: Option<Duration>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProductStore>,
        auth: Arc<AuthService>,
        issuer: Arc<TokenIssuer>,
        policies: Arc<PolicySet>,
        create_delay: Option<Duration>,
    ) -> Self {
        Self {
            store,
            auth,
            issuer,
            policies,
            create_delay,
        }
    }
}
