use super::jwt_auth_service::JwtAuthService;
use crate::auth::jwt_verifier::JwtVerifier;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::sync::Arc;
use tower::Layer;

///
/// Layer that rejects requests without a valid bearer JWT with 401.
/// Accepted requests get [crate::auth::User] in their extensions.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    verifier: Arc<JwtVerifier>,
}

impl JwtAuthLayer {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        Self {
            verifier: Arc::new(JwtVerifier::new(key, algorithms)),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.verifier.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auth::User;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, HeaderValue, Method, Request, StatusCode},
        routing::get,
        Extension, Router,
    };
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &[u8] = b"some secret";
    const NEVER_EXPIRES: i64 = 253402210800;

    fn sign(claims: serde_json::Value, secret: &[u8]) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn router() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<User>| async move { user.id.to_string() }),
            )
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
            ))
    }

    #[tokio::test]
    async fn missing_authorization_header() {
        test_unauthorized(None).await;
    }

    #[tokio::test]
    async fn invalid_authorization_header() {
        test_unauthorized("invalid characters ąćś").await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        let token = sign(json!({ "sub": Uuid::new_v4(), "exp": NEVER_EXPIRES }), SECRET);
        test_unauthorized(format!("Basic {token}").as_str()).await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_unauthorized("Bearer that's not correct JWT").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let token = sign(json!({ "sub": Uuid::new_v4(), "exp": 12312 }), SECRET);
        test_unauthorized(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn invalid_signature() {
        let token = sign(
            json!({ "sub": Uuid::new_v4(), "exp": NEVER_EXPIRES }),
            b"wrong secret",
        );
        test_unauthorized(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn sub_not_uuid() {
        let token = sign(json!({ "sub": 15, "exp": NEVER_EXPIRES }), SECRET);
        test_unauthorized(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let user_id = Uuid::new_v4();
        let token = sign(json!({ "sub": user_id, "exp": NEVER_EXPIRES }), SECRET);

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string());
    }

    async fn test_unauthorized(authorization: impl Into<Option<&str>>) {
        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
