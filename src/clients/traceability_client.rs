use crate::clients::page_client::PageClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::traceability_page::{
    TraceabilityCommand, TraceabilityError, TraceabilityReply, TraceabilitySession,
    TraceabilityView,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for driving the traceability page.
#[derive(Clone)]
pub struct TraceabilityClient {
    inner: SessionClient<TraceabilitySession>,
}

impl TraceabilityClient {
    pub fn new(inner: SessionClient<TraceabilitySession>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PageClient<TraceabilitySession> for TraceabilityClient {
    type Error = TraceabilityError;

    fn inner(&self) -> &SessionClient<TraceabilitySession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TraceabilityError::ActorCommunicationError(e.to_string())
    }
}

impl TraceabilityClient {
    /// Exact-match product lookup. Returns the resulting selection; a miss
    /// comes back as `None` (the page has already notified the user).
    #[instrument(skip(self))]
    pub async fn search(&self, input: &str) -> Result<Option<String>, TraceabilityError> {
        debug!("Sending request");
        match self
            .inner
            .command(TraceabilityCommand::Search(input.to_string()))
            .await
            .map_err(Self::map_error)?
        {
            TraceabilityReply::Selection(selection) => Ok(selection),
            other => Err(TraceabilityError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Simulated QR scan: selects a uniformly random known product.
    #[instrument(skip(self))]
    pub async fn scan_qr(&self) -> Result<Option<String>, TraceabilityError> {
        debug!("Sending request");
        match self
            .inner
            .command(TraceabilityCommand::ScanQr)
            .await
            .map_err(Self::map_error)?
        {
            TraceabilityReply::Selection(selection) => Ok(selection),
            other => Err(TraceabilityError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Current render data; `None` is the empty state.
    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<Option<TraceabilityView>, TraceabilityError> {
        debug!("Sending request");
        match self
            .inner
            .command(TraceabilityCommand::View)
            .await
            .map_err(Self::map_error)?
        {
            TraceabilityReply::View(view) => Ok(view),
            other => Err(TraceabilityError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}
