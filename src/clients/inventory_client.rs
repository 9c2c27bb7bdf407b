use crate::clients::page_client::PageClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::inventory_page::{
    InventoryCommand, InventoryError, InventoryReply, InventorySession, InventoryView,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for driving the inventory dashboard.
#[derive(Clone)]
pub struct InventoryClient {
    inner: SessionClient<InventorySession>,
}

impl InventoryClient {
    pub fn new(inner: SessionClient<InventorySession>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PageClient<InventorySession> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &SessionClient<InventorySession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::ActorCommunicationError(e.to_string())
    }
}

impl InventoryClient {
    /// Highlights a table row; `None` clears the highlight. Returns the
    /// resulting selection.
    #[instrument(skip(self))]
    pub async fn select(
        &self,
        product_id: Option<&str>,
    ) -> Result<Option<String>, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .command(InventoryCommand::Select(product_id.map(str::to_string)))
            .await
            .map_err(Self::map_error)?
        {
            InventoryReply::Selection(selection) => Ok(selection),
            other => Err(InventoryError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Simulated shipment between stores. Returns whether the product id
    /// was known; either way the user has been notified.
    #[instrument(skip(self))]
    pub async fn ship(&self, product_id: &str, from: &str, to: &str) -> Result<bool, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .command(InventoryCommand::Ship {
                product_id: product_id.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            })
            .await
            .map_err(Self::map_error)?
        {
            InventoryReply::Ack(known) => Ok(known),
            other => Err(InventoryError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Simulated "AI-powered" restock order.
    #[instrument(skip(self))]
    pub async fn restock(&self, product_id: &str) -> Result<bool, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .command(InventoryCommand::Restock { product_id: product_id.to_string() })
            .await
            .map_err(Self::map_error)?
        {
            InventoryReply::Ack(known) => Ok(known),
            other => Err(InventoryError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// The full dashboard render data.
    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<InventoryView, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .command(InventoryCommand::View)
            .await
            .map_err(Self::map_error)?
        {
            InventoryReply::View(view) => Ok(view),
            other => Err(InventoryError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}
