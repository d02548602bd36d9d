//! Capability-typed order submission strategies.
//!
//! The cancel/replace lifecycle has two execution modes depending on
//! venue capability: one batch round-trip per operation type, or
//! strictly sequential single-order calls. Both expose the same
//! observable behavior — the same placement results in the same
//! positions — so the session records resting ids identically in
//! either mode. The strategy is selected once, at construction, via
//! [`submitter_for`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use bomm_core::{OrderId, OrderSide, VenueId};

use crate::service::{ExecutionService, OrderRequest, PlacementResult};

/// Order submission strategy.
///
/// Failures never abort the pass: a cancel or placement that fails is
/// logged and skipped, and the remaining requests still execute.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Cancel all given resting orders.
    async fn cancel_all(&self, venue: &VenueId, ids: &[OrderId]);

    /// Place all given orders; one result per input, in input order.
    async fn place_all(&self, orders: &[OrderRequest]) -> Vec<PlacementResult>;
}

/// Pick the submission strategy for a venue.
pub fn submitter_for(service: Arc<dyn ExecutionService>) -> Box<dyn OrderSubmitter> {
    if service.supports_batch() {
        Box::new(BatchSubmitter::new(service))
    } else {
        Box::new(SequentialSubmitter::new(service))
    }
}

/// One batch round-trip per operation type.
pub struct BatchSubmitter {
    service: Arc<dyn ExecutionService>,
}

impl BatchSubmitter {
    pub fn new(service: Arc<dyn ExecutionService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl OrderSubmitter for BatchSubmitter {
    async fn cancel_all(&self, venue: &VenueId, ids: &[OrderId]) {
        if ids.is_empty() {
            return;
        }
        match self.service.cancel_orders_batch(venue, ids).await {
            Ok(()) => debug!(count = ids.len(), "Batch cancel submitted"),
            Err(e) => warn!(count = ids.len(), error = %e, "Batch cancel failed"),
        }
    }

    async fn place_all(&self, orders: &[OrderRequest]) -> Vec<PlacementResult> {
        if orders.is_empty() {
            return Vec::new();
        }
        match self.service.place_orders_batch(orders).await {
            Ok(results) => {
                if results.len() != orders.len() {
                    warn!(
                        submitted = orders.len(),
                        returned = results.len(),
                        "Batch placement result count mismatch; padding with failures"
                    );
                }
                let mut results = results;
                results.resize_with(orders.len(), PlacementResult::failed);
                results
            }
            Err(e) => {
                warn!(count = orders.len(), error = %e, "Batch placement failed");
                orders.iter().map(|_| PlacementResult::failed()).collect()
            }
        }
    }
}

/// One order at a time, sequentially awaited.
///
/// Bounds worst-case concurrent load on venues that cannot batch.
pub struct SequentialSubmitter {
    service: Arc<dyn ExecutionService>,
}

impl SequentialSubmitter {
    pub fn new(service: Arc<dyn ExecutionService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl OrderSubmitter for SequentialSubmitter {
    async fn cancel_all(&self, venue: &VenueId, ids: &[OrderId]) {
        for id in ids {
            if let Err(e) = self.service.cancel_order(venue, id).await {
                warn!(order_id = %id, error = %e, "Cancel failed");
            }
        }
    }

    async fn place_all(&self, orders: &[OrderRequest]) -> Vec<PlacementResult> {
        let mut results = Vec::with_capacity(orders.len());
        for order in orders {
            let outcome = match order.side {
                OrderSide::Buy => self.service.maker_buy(order).await,
                OrderSide::Sell => self.service.maker_sell(order).await,
            };
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(side = %order.side, price = %order.price, error = %e, "Placement failed");
                    results.push(PlacementResult::failed());
                }
            }
        }
        results
    }
}
