use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pin_project::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tracing::instrument::Instrumented;

#[pin_project(project = JwtAuthFutureProj)]
pub enum JwtAuthFuture<F> {
    /// Inner service runs inside the `user` span
    Accepted {
        #[pin]
        inner: Instrumented<F>,
    },
    Rejected,
}

impl<F, E> Future for JwtAuthFuture<F>
where
    F: Future<Output = Result<Response, E>>,
{
    type Output = Result<Response, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            JwtAuthFutureProj::Accepted { inner } => inner.poll(cx),
            JwtAuthFutureProj::Rejected => {
                Poll::Ready(Ok(StatusCode::UNAUTHORIZED.into_response()))
            }
        }
    }
}
