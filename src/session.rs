use crate::errors::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION: &str = "default";
const MAX_SESSION_ID_LEN: usize = 64;

/// Key of the session a request operates on, taken from the
/// `x-session-id` header. Requests without one share the default session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let id = raw.map(str::trim).unwrap_or_default();
        if id.is_empty() {
            return Ok(Self(DEFAULT_SESSION.to_string()));
        }
        if id.len() > MAX_SESSION_ID_LEN {
            return Err(AppError::bad_request(format!(
                "{SESSION_HEADER} must be at most {MAX_SESSION_ID_LEN} bytes"
            )));
        }
        Ok(Self(id.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.headers.get(SESSION_HEADER) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AppError::bad_request(format!("{SESSION_HEADER} must be ASCII"))
            })?),
            None => None,
        };
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_header_uses_default_session() {
        assert_eq!(SessionId::parse(None).unwrap().0, "default");
        assert_eq!(SessionId::parse(Some("   ")).unwrap().0, "default");
        assert_eq!(SessionId::parse(Some(" tab-7 ")).unwrap().0, "tab-7");
    }

    #[test]
    fn overlong_id_is_rejected() {
        let id = "x".repeat(65);
        let err = SessionId::parse(Some(&id)).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }
}
