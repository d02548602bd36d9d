//! In-memory execution service for paper trading and tests.
//!
//! Mints local order ids and keeps resting orders in a map. Tests can
//! script per-order accept/reject outcomes to exercise the failure
//! paths without a venue.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use bomm_core::{OrderId, OrderSide, VenueId};

use crate::error::{ExecutorError, ExecutorResult};
use crate::service::{ExecutionService, OrderRequest, PlacementResult};

/// Simulated venue: every accepted order rests until cancelled.
pub struct PaperExecutionService {
    supports_batch: bool,
    open: Mutex<HashMap<OrderId, OrderRequest>>,
    /// Scripted accept/reject outcomes; empty queue means accept.
    outcomes: Mutex<VecDeque<bool>>,
}

impl PaperExecutionService {
    pub fn new(supports_batch: bool) -> Self {
        Self {
            supports_batch,
            open: Mutex::new(HashMap::new()),
            outcomes: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue accept/reject outcomes for upcoming placements.
    pub fn script_outcomes(&self, outcomes: &[bool]) {
        self.outcomes.lock().extend(outcomes.iter().copied());
    }

    /// Number of currently resting orders.
    pub fn open_order_count(&self) -> usize {
        self.open.lock().len()
    }

    /// Snapshot of currently resting orders.
    pub fn open_orders(&self) -> Vec<(OrderId, OrderRequest)> {
        self.open
            .lock()
            .iter()
            .map(|(id, req)| (id.clone(), req.clone()))
            .collect()
    }

    fn next_outcome(&self) -> bool {
        self.outcomes.lock().pop_front().unwrap_or(true)
    }

    fn place_one(&self, order: &OrderRequest) -> PlacementResult {
        if !self.next_outcome() {
            return PlacementResult::failed();
        }
        let id = OrderId::new(format!("paper-{}", &Uuid::new_v4().to_string()[..8]));
        self.open.lock().insert(id.clone(), order.clone());
        debug!(order_id = %id, side = %order.side, price = %order.price, "Paper order resting");
        PlacementResult::accepted(id)
    }
}

#[async_trait]
impl ExecutionService for PaperExecutionService {
    fn supports_batch(&self) -> bool {
        self.supports_batch
    }

    async fn maker_buy(&self, order: &OrderRequest) -> ExecutorResult<PlacementResult> {
        debug_assert_eq!(order.side, OrderSide::Buy);
        Ok(self.place_one(order))
    }

    async fn maker_sell(&self, order: &OrderRequest) -> ExecutorResult<PlacementResult> {
        debug_assert_eq!(order.side, OrderSide::Sell);
        Ok(self.place_one(order))
    }

    async fn place_orders_batch(
        &self,
        orders: &[OrderRequest],
    ) -> ExecutorResult<Vec<PlacementResult>> {
        Ok(orders.iter().map(|o| self.place_one(o)).collect())
    }

    async fn cancel_order(&self, _venue: &VenueId, id: &OrderId) -> ExecutorResult<()> {
        match self.open.lock().remove(id) {
            Some(_) => Ok(()),
            None => Err(ExecutorError::UnknownOrder(id.clone())),
        }
    }

    async fn cancel_orders_batch(&self, _venue: &VenueId, ids: &[OrderId]) -> ExecutorResult<()> {
        let mut open = self.open.lock();
        for id in ids {
            open.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomm_core::{Price, Size, TokenId};
    use rust_decimal_macros::dec;

    fn req(side: OrderSide) -> OrderRequest {
        OrderRequest::new(
            TokenId::new("tok"),
            side,
            Price::new(dec!(0.50)),
            Size::new(dec!(10)),
            false,
        )
    }

    #[tokio::test]
    async fn test_place_and_cancel() {
        let venue = PaperExecutionService::new(true);
        let result = venue.maker_buy(&req(OrderSide::Buy)).await.unwrap();
        assert!(result.success);
        let id = result.order_id.unwrap();
        assert_eq!(venue.open_order_count(), 1);

        venue
            .cancel_order(&VenueId::new("paper"), &id)
            .await
            .unwrap();
        assert_eq!(venue.open_order_count(), 0);
    }

    #[tokio::test]
    async fn test_cancel_unknown_order_fails() {
        let venue = PaperExecutionService::new(true);
        let err = venue
            .cancel_order(&VenueId::new("paper"), &OrderId::new("missing"))
            .await;
        assert!(matches!(err, Err(ExecutorError::UnknownOrder(_))));
    }

    #[tokio::test]
    async fn test_scripted_rejection() {
        let venue = PaperExecutionService::new(true);
        venue.script_outcomes(&[false]);
        let result = venue.maker_sell(&req(OrderSide::Sell)).await.unwrap();
        assert!(!result.success);
        assert!(result.order_id.is_none());
        assert_eq!(venue.open_order_count(), 0);
    }

    #[tokio::test]
    async fn test_batch_results_positional() {
        let venue = PaperExecutionService::new(true);
        venue.script_outcomes(&[true, false, true]);
        let orders = vec![req(OrderSide::Buy), req(OrderSide::Buy), req(OrderSide::Sell)];
        let results = venue.place_orders_batch(&orders).await.unwrap();
        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[2].success);
    }
}
