use crate::framework::{FrameworkError, PageSession, SessionClient};
use async_trait::async_trait;

/// Trait for page-specific clients to inherit the operations every page
/// shares.
///
/// This keeps the boilerplate in one place: each concrete client supplies
/// its inner generic client and error mapping, and gets `reset` for free.
#[async_trait]
pub trait PageClient<P: PageSession>: Send + Sync {
    /// The page-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic SessionClient.
    fn inner(&self) -> &SessionClient<P>;

    /// Map framework errors to the specific page error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Returns the page to its initial state (the navigation hook).
    #[tracing::instrument(skip(self))]
    async fn reset(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().reset().await.map_err(Self::map_error)
    }
}
