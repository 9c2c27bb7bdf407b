use crate::clients::page_client::PageClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::home_page::{HomeCommand, HomeError, HomeOverview, HomeReply, HomeSession};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the landing page.
#[derive(Clone)]
pub struct HomeClient {
    inner: SessionClient<HomeSession>,
}

impl HomeClient {
    pub fn new(inner: SessionClient<HomeSession>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PageClient<HomeSession> for HomeClient {
    type Error = HomeError;

    fn inner(&self) -> &SessionClient<HomeSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        HomeError::ActorCommunicationError(e.to_string())
    }
}

impl HomeClient {
    /// The landing page's full render data.
    #[instrument(skip(self))]
    pub async fn overview(&self) -> Result<HomeOverview, HomeError> {
        debug!("Sending request");
        let HomeReply::Overview(overview) = self
            .inner
            .command(HomeCommand::Overview)
            .await
            .map_err(Self::map_error)?;
        Ok(overview)
    }
}
