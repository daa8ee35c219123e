//! # Order store client
//!
//! The cheap, cloneable interface to a store actor. Every method sends one
//! request over the actor's mpsc channel and awaits the oneshot response;
//! channel failures map to [`StoreError::StoreClosed`] /
//! [`StoreError::StoreDropped`].

use super::error::StoreError;
use super::message::{OrderFilter, StoreRequest, StoreStats};
use crate::model::{CartLine, Order, OrderId};
use tokio::sync::{mpsc, oneshot};

#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl OrderStoreClient {
    pub(super) fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Submits the given cart lines for a table. The lines are snapshotted
    /// by value; the caller keeps its cart.
    pub async fn submit(
        &self,
        lines: Vec<CartLine>,
        table: impl Into<String>,
        customer: impl Into<String>,
    ) -> Result<Order, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Submit {
                lines,
                table: table.into(),
                customer: customer.into(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Marks an order served. Returns whether a transition happened;
    /// unknown or already-completed ids return `false`.
    pub async fn complete(&self, id: OrderId) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Complete { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Matching orders, most recent first.
    pub async fn list(&self, filter: OrderFilter) -> Result<Vec<Order>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { filter, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Pending count and gross revenue.
    pub async fn stats(&self) -> Result<StoreStats, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Stats { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// The full collection in insertion order.
    pub async fn orders(&self) -> Result<Vec<Order>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Orders { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
