use crate::clients::page_client::PageClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::returns_page::{
    ClaimForm, ClaimUpdate, ReturnsCommand, ReturnsError, ReturnsReply, ReturnsSession,
    WarrantyView,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for driving the warranty & returns page.
#[derive(Clone)]
pub struct ReturnsClient {
    inner: SessionClient<ReturnsSession>,
}

impl ReturnsClient {
    pub fn new(inner: SessionClient<ReturnsSession>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PageClient<ReturnsSession> for ReturnsClient {
    type Error = ReturnsError;

    fn inner(&self) -> &SessionClient<ReturnsSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ReturnsError::ActorCommunicationError(e.to_string())
    }
}

impl ReturnsClient {
    /// Tri-key warranty lookup (warranty id, product id, serial number).
    /// Returns the resulting selection; `None` on a miss.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Option<String>, ReturnsError> {
        debug!("Sending request");
        match self
            .inner
            .command(ReturnsCommand::Search(query.to_string()))
            .await
            .map_err(Self::map_error)?
        {
            ReturnsReply::Selection(selection) => Ok(selection),
            other => Err(ReturnsError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Edits the claim form; returns its new state.
    #[instrument(skip(self))]
    pub async fn update_claim(&self, update: ClaimUpdate) -> Result<ClaimForm, ReturnsError> {
        debug!("Sending request");
        match self
            .inner
            .command(ReturnsCommand::UpdateClaim(update))
            .await
            .map_err(Self::map_error)?
        {
            ReturnsReply::Form(form) => Ok(form),
            other => Err(ReturnsError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Submits the claim. `Some(reference)` on success; `None` when the
    /// form was rejected (the page has already notified the user).
    #[instrument(skip(self))]
    pub async fn submit_claim(&self) -> Result<Option<String>, ReturnsError> {
        debug!("Sending request");
        match self
            .inner
            .command(ReturnsCommand::SubmitClaim)
            .await
            .map_err(Self::map_error)?
        {
            ReturnsReply::ClaimSubmitted(reference) => Ok(reference),
            other => Err(ReturnsError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Current render data; `None` is the empty state.
    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<Option<WarrantyView>, ReturnsError> {
        debug!("Sending request");
        match self
            .inner
            .command(ReturnsCommand::View)
            .await
            .map_err(Self::map_error)?
        {
            ReturnsReply::View(view) => Ok(view),
            other => Err(ReturnsError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}
