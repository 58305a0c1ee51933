use axum::http::{request::Parts, HeaderMap, StatusCode};
use axum::extract::FromRequestParts;
use tracing::Span;

/// Caller identity as verified by the upstream authentication proxy. The
/// proxy terminates the session and forwards the subject in `X-User-Id`
/// (plus optional profile headers); this service trusts those values and
/// performs no verification of its own.
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header_string(&parts.headers, "X-User-Id")
            .filter(|value| !value.is_empty())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let user = AuthUser {
            id,
            email: header_string(&parts.headers, "X-User-Email"),
            first_name: header_string(&parts.headers, "X-User-First-Name"),
            last_name: header_string(&parts.headers, "X-User-Last-Name"),
        };

        Span::current().record("user_id", &user.id);

        Ok(user)
    }
}
