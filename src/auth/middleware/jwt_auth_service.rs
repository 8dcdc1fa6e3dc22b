use super::jwt_auth_future::JwtAuthFuture;
use crate::auth::jwt_verifier::JwtVerifier;
use axum::{extract::Request, response::Response};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;
use tracing::Instrument;

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    verifier: Arc<JwtVerifier>,
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, verifier: Arc<JwtVerifier>) -> Self {
        Self { inner, verifier }
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let user = match self.verifier.verify(req.headers()) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(%err, "request rejected");
                return JwtAuthFuture::Rejected;
            }
        };

        let span = tracing::info_span!("user", id = %user.id);
        req.extensions_mut().insert(user);

        JwtAuthFuture::Accepted {
            inner: self.inner.call(req).instrument(span),
        }
    }
}
