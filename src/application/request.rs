// src/application/request.rs
use crate::application::{ApplicationResult, validation::FailureShape};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A command or query, tied at compile time to the outcome its handler returns.
pub trait Request: Send + Sync + 'static {
    type Response: FailureShape + Send + 'static;

    #[must_use]
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The business handler behind a request.
///
/// Business failures belong in the returned outcome. `Err` is reserved for
/// faults such as cancellation or a broken collaborator.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(
        &self,
        request: R,
        cancel: &CancellationToken,
    ) -> ApplicationResult<R::Response>;
}
