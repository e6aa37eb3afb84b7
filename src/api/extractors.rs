//! Handler-side authorization extractor.
//!
//! The bearer-auth middleware authenticates and leaves a `Principal` in
//! request extensions; `Authorized<P>` then evaluates the named policy
//! before the handler body ever runs. A denied policy rejects with 403,
//! a missing principal (no middleware on the route) with 401.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::Principal;
use crate::services::auth::policy::{Decision, names};
use crate::state::AppState;

/// Compile-time link from a route to the policy it requires.
pub trait PolicyTag {
    const NAME: &'static str;
}

pub struct EditorPolicy;
pub struct ReaderPolicy;

impl PolicyTag for EditorPolicy {
    const NAME: &'static str = names::SHOULD_BE_AN_EDITOR;
}
impl PolicyTag for ReaderPolicy {
    const NAME: &'static str = names::SHOULD_BE_A_READER;
}

/// Principal that passed the policy `P`.
pub struct Authorized<P> {
    pub principal: Principal,
    _policy: PhantomData<P>,
}

impl<P> FromRequestParts<AppState> for Authorized<P>
where
    P: PolicyTag + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or(AppError::Unauthorized)?;

        let policy = state.policies.get(P::NAME).ok_or_else(|| {
            // A route naming a policy the startup table does not know is a wiring bug.
            tracing::error!(policy = P::NAME, "unknown authorization policy");
            AppError::Internal
        })?;

        match policy.evaluate(Some(&principal)) {
            Decision::Allow => Ok(Authorized {
                principal,
                _policy: PhantomData,
            }),
            Decision::Deny(reason) => {
                tracing::warn!(
                    policy = P::NAME,
                    subject = %principal.subject,
                    reason,
                    "authorization denied"
                );
                Err(AppError::Forbidden { reason })
            }
        }
    }
}
