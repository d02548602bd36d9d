//! The execution-service trait and its request/result types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bomm_core::{OrderId, OrderSide, Price, Size, TokenId, VenueId};

use crate::ExecutorResult;

/// A maker order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Outcome token to quote.
    pub token: TokenId,
    /// Buy (bid) or sell (ask).
    pub side: OrderSide,
    /// Limit price.
    pub price: Price,
    /// Size in shares.
    pub size: Size,
    /// Negative-risk market flag (venue-specific routing).
    pub neg_risk: bool,
}

impl OrderRequest {
    pub fn new(token: TokenId, side: OrderSide, price: Price, size: Size, neg_risk: bool) -> Self {
        Self {
            token,
            side,
            price,
            size,
            neg_risk,
        }
    }
}

/// Per-order placement outcome.
///
/// Batch placement returns one of these per submitted order, in the
/// order submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Whether the venue accepted the order.
    pub success: bool,
    /// Venue-assigned order id when accepted.
    pub order_id: Option<OrderId>,
}

impl PlacementResult {
    pub fn accepted(order_id: OrderId) -> Self {
        Self {
            success: true,
            order_id: Some(order_id),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            order_id: None,
        }
    }
}

/// Venue order placement and cancellation.
///
/// Implementations own authentication, signing, retries, and rate
/// limits. The engine treats each call as a single attempt whose
/// outcome is final for the current tick.
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Whether the venue supports atomic multi-order batches.
    ///
    /// Consulted once, at session construction, to pick the
    /// submission strategy.
    fn supports_batch(&self) -> bool;

    /// Place a single resting buy (bid).
    async fn maker_buy(&self, order: &OrderRequest) -> ExecutorResult<PlacementResult>;

    /// Place a single resting sell (ask).
    async fn maker_sell(&self, order: &OrderRequest) -> ExecutorResult<PlacementResult>;

    /// Place a batch of orders; one result per input, in input order.
    async fn place_orders_batch(
        &self,
        orders: &[OrderRequest],
    ) -> ExecutorResult<Vec<PlacementResult>>;

    /// Cancel a single resting order.
    async fn cancel_order(&self, venue: &VenueId, id: &OrderId) -> ExecutorResult<()>;

    /// Cancel a batch of resting orders in one call.
    async fn cancel_orders_batch(&self, venue: &VenueId, ids: &[OrderId]) -> ExecutorResult<()>;
}
