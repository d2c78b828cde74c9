//! 调用者身份提取
//!
//! 认证本身委托给前置网关（会话流由客户端 shell 订阅）；
//! 本服务信任网关注入的 X-User-Id 头，仅校验其为合法 UUID。

use axum::{async_trait, extract::FromRequestParts};
use http::request::Parts;
use uuid::Uuid;

use super::error::ApiError;

/// 网关注入的用户标识头
pub const USER_ID_HEADER: &str = "x-user-id";

/// 已认证用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Uuid);

impl AuthenticatedUser {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing X-User-Id header".to_string()))?;

        let user_id = Uuid::parse_str(value)
            .map_err(|_| ApiError::Unauthorized("Invalid X-User-Id header".to_string()))?;

        Ok(AuthenticatedUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Router};
    use tower::util::ServiceExt;

    async fn whoami(user: AuthenticatedUser) -> String {
        user.id().to_string()
    }

    fn create_test_router() -> Router {
        Router::new().route("/whoami", get(whoami))
    }

    #[tokio::test]
    async fn test_valid_header_extracts_user() {
        let app = create_test_router();
        let user_id = Uuid::new_v4();
        let request = HttpRequest::builder()
            .uri("/whoami")
            .header(USER_ID_HEADER, user_id.to_string())
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("\"errno\":401"));
    }

    #[tokio::test]
    async fn test_malformed_header_rejected() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/whoami")
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("\"errno\":401"));
    }
}
