// The caller is identified by a header set by the upstream gateway, which has
// already verified it.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
    response::Response,
};

use crate::modules::access_control::core::scope::Actor;
use crate::shell::response;

pub const USER_ID_HEADER: &str = "x-user-id";

pub fn actor_from_headers(headers: &HeaderMap) -> Option<Actor> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|user_id| !user_id.is_empty())
        .map(Actor::new)
}

/// Rejects the request with 401 when no caller is present.
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_from_headers(&parts.headers)
            .map(CurrentActor)
            .ok_or_else(response::unauthenticated)
    }
}
