//! Quoting session lifecycle.
//!
//! [`MakerSession`] owns the mutable state for one market and drives
//! the per-tick cancel/replace cycle: read a book snapshot, update
//! fair value and volatility, decide whether to requote, rebuild and
//! resubmit the ladder. Fill notifications arrive between ticks and
//! feed the risk state machine, which can halt the session for good.

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use tracing::{debug, error, info, warn};

use bomm_core::{Fill, OrderId, OrderSide, Price, Size};
use bomm_executor::{submitter_for, ExecutionService, OrderRequest, OrderSubmitter};
use bomm_feed::{PriceFeed, PriceUpdate};

use crate::config::QuoterConfig;
use crate::fair_value::{apply_ema, raw_fair_value};
use crate::quote::{build_ladder, Quote};
use crate::requote::requote_due;
use crate::spread::{adjusted_spread_cents, inventory_skew};
use crate::volatility::VolatilityWindow;

/// Session lifecycle state.
///
/// `Halted` is terminal: the session never quotes again and the
/// reason is retained for operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No orders placed yet.
    Idle,
    /// At least one tick has placed orders.
    Quoting,
    /// Risk limit breached; quoting is permanently suppressed.
    Halted(String),
}

impl SessionStatus {
    pub fn is_halted(&self) -> bool {
        matches!(self, SessionStatus::Halted(_))
    }

    pub fn halt_reason(&self) -> Option<&str> {
        match self {
            SessionStatus::Halted(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Record of one successfully placed order, for downstream logging.
#[derive(Debug, Clone)]
pub struct QuoteSignal {
    pub side: OrderSide,
    pub price: Price,
    pub size: Size,
    pub rationale: String,
}

/// Read-only view of session state for monitoring and CLI tooling.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub fair_value: Decimal,
    pub ema_fair_value: Decimal,
    pub inventory: Decimal,
    pub realized_pnl: Decimal,
    pub fill_count: u64,
    pub resting_bids: usize,
    pub resting_asks: usize,
    pub halt_reason: Option<String>,
}

#[derive(Debug)]
struct SessionState {
    /// Raw fair value the resting ladder was quoted from.
    fair_value: Decimal,
    ema_fair_value: Decimal,
    inventory: Decimal,
    realized_pnl: Decimal,
    fill_count: u64,
    resting_bids: Vec<OrderId>,
    resting_asks: Vec<OrderId>,
    last_requote_ms: u64,
    status: SessionStatus,
}

impl SessionState {
    fn new() -> Self {
        Self {
            fair_value: Decimal::ZERO,
            ema_fair_value: Decimal::ZERO,
            inventory: Decimal::ZERO,
            realized_pnl: Decimal::ZERO,
            fill_count: 0,
            resting_bids: Vec::new(),
            resting_asks: Vec::new(),
            last_requote_ms: 0,
            status: SessionStatus::Idle,
        }
    }

    fn resting_ids(&self) -> Vec<OrderId> {
        self.resting_bids
            .iter()
            .chain(self.resting_asks.iter())
            .cloned()
            .collect()
    }
}

/// One quoting session for a single venue/market/token.
///
/// Ticks and fill notifications must be serialized by the caller;
/// the session itself holds no locks.
pub struct MakerSession {
    config: QuoterConfig,
    state: SessionState,
    window: VolatilityWindow,
    feed: Arc<dyn PriceFeed>,
    submitter: Box<dyn OrderSubmitter>,
    updates: Option<Receiver<PriceUpdate>>,
}

impl MakerSession {
    pub fn new(
        config: QuoterConfig,
        feed: Arc<dyn PriceFeed>,
        execution: Arc<dyn ExecutionService>,
    ) -> Self {
        let submitter = submitter_for(execution);
        Self {
            config,
            state: SessionState::new(),
            window: VolatilityWindow::new(),
            feed,
            submitter,
            updates: None,
        }
    }

    /// Subscribe to the price-update stream.
    pub fn init(&mut self) {
        self.updates = Some(self.feed.subscribe());
        info!(
            venue = %self.config.venue,
            market = %self.config.market,
            token = %self.config.token,
            "Quoting session initialized"
        );
    }

    pub fn status(&self) -> &SessionStatus {
        &self.state.status
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            fair_value: self.state.fair_value,
            ema_fair_value: self.state.ema_fair_value,
            inventory: self.state.inventory,
            realized_pnl: self.state.realized_pnl,
            fill_count: self.state.fill_count,
            resting_bids: self.state.resting_bids.len(),
            resting_asks: self.state.resting_asks.len(),
            halt_reason: self.state.status.halt_reason().map(String::from),
        }
    }

    /// Run one evaluation tick.
    ///
    /// `now_ms` is the scheduler's monotonic clock. Returns one signal
    /// per successfully placed order; an empty result means the tick
    /// no-opped (halted, untradeable book, or no requote due).
    pub async fn evaluate(&mut self, now_ms: u64) -> Vec<QuoteSignal> {
        if self.state.status.is_halted() {
            return Vec::new();
        }

        self.drain_price_updates();

        let book = match self.feed.fetch_book().await {
            Ok(Some(book)) => book,
            Ok(None) => {
                debug!(token = %self.config.token, "No order book this tick");
                return Vec::new();
            }
            Err(e) => {
                warn!(token = %self.config.token, error = %e, "Order book fetch failed");
                return Vec::new();
            }
        };
        if !book.is_tradeable() {
            debug!(token = %self.config.token, "Book has an empty side, skipping tick");
            return Vec::new();
        }

        let raw = raw_fair_value(self.config.fair_value_method, &book);
        let elapsed_ms = now_ms.saturating_sub(self.state.last_requote_ms);
        if !requote_due(&self.config, self.state.fair_value, raw, elapsed_ms) {
            return Vec::new();
        }

        self.cancel_resting().await;

        self.state.fair_value = raw;
        self.state.ema_fair_value = apply_ema(self.state.ema_fair_value, raw, self.config.ema_alpha);
        self.state.last_requote_ms = now_ms;

        let volatility = self.window.volatility();
        let spread_cents = adjusted_spread_cents(&self.config, volatility);
        let skew = inventory_skew(&self.config, self.state.inventory);
        let ladder = build_ladder(
            &self.config,
            self.state.ema_fair_value,
            spread_cents,
            skew,
            volatility,
            self.state.inventory,
        );

        debug!(
            token = %self.config.token,
            fair_value = %ladder.fair_value,
            spread_cents = %spread_cents,
            skew = %skew,
            volatility,
            bids = ladder.bids.len(),
            asks = ladder.asks.len(),
            "Requoting"
        );

        let quotes: Vec<&Quote> = ladder.bids.iter().chain(ladder.asks.iter()).collect();
        if quotes.is_empty() {
            return Vec::new();
        }

        let orders: Vec<OrderRequest> = quotes
            .iter()
            .map(|q| {
                OrderRequest::new(
                    self.config.token.clone(),
                    q.side,
                    q.price,
                    q.size,
                    self.config.neg_risk,
                )
            })
            .collect();
        let results = self.submitter.place_all(&orders).await;

        let mut signals = Vec::with_capacity(quotes.len());
        for (quote, result) in quotes.iter().zip(results) {
            let id = match (result.success, result.order_id) {
                (true, Some(id)) => id,
                _ => continue,
            };
            match quote.side {
                OrderSide::Buy => self.state.resting_bids.push(id),
                OrderSide::Sell => self.state.resting_asks.push(id),
            }
            signals.push(QuoteSignal {
                side: quote.side,
                price: quote.price,
                size: quote.size,
                rationale: format!(
                    "fair value {} skew {} spread {}c",
                    ladder.fair_value.round_dp(4),
                    skew.round_dp(4),
                    spread_cents.round_dp(2)
                ),
            });
        }

        if !signals.is_empty() {
            self.state.status = SessionStatus::Quoting;
        }
        signals
    }

    /// Process a fill notification.
    ///
    /// Updates inventory and realized P&L against the current fair
    /// value, then applies the loss ceiling.
    pub fn on_trade(&mut self, fill: &Fill) {
        if fill.token != self.config.token {
            debug!(token = %fill.token, "Ignoring fill for foreign token");
            return;
        }

        let size = fill.size.inner();
        let edge = fill.price.inner() - self.state.fair_value;
        match fill.side {
            OrderSide::Buy => {
                self.state.inventory += size;
                self.state.realized_pnl -= size * edge;
            }
            OrderSide::Sell => {
                self.state.inventory -= size;
                self.state.realized_pnl += size * edge;
            }
        }
        self.state.fill_count += 1;

        if self.state.inventory.abs() > self.config.max_inventory {
            warn!(
                token = %self.config.token,
                inventory = %self.state.inventory,
                max_inventory = %self.config.max_inventory,
                "Inventory breached the configured limit"
            );
            self.state.inventory = self
                .state
                .inventory
                .max(-self.config.max_inventory)
                .min(self.config.max_inventory);
        }

        info!(
            token = %self.config.token,
            side = %fill.side,
            price = %fill.price,
            size = %fill.size,
            inventory = %self.state.inventory,
            realized_pnl = %self.state.realized_pnl,
            "Fill processed"
        );

        if !self.state.status.is_halted() && self.state.realized_pnl < -self.config.max_loss_usd {
            let reason = format!(
                "realized pnl {} breached max loss {}",
                self.state.realized_pnl, self.config.max_loss_usd
            );
            error!(token = %self.config.token, reason = %reason, "Session halted");
            self.state.status = SessionStatus::Halted(reason);
        }
    }

    /// Unsubscribe and cancel every resting order.
    pub async fn cleanup(&mut self) {
        self.updates = None;
        self.cancel_resting().await;
        info!(token = %self.config.token, "Quoting session cleaned up");
    }

    async fn cancel_resting(&mut self) {
        let ids = self.state.resting_ids();
        if ids.is_empty() {
            return;
        }
        self.submitter.cancel_all(&self.config.venue, &ids).await;
        self.state.resting_bids.clear();
        self.state.resting_asks.clear();
    }

    /// Pull queued price updates into the volatility window.
    fn drain_price_updates(&mut self) {
        let mut closed = false;
        if let Some(rx) = self.updates.as_mut() {
            loop {
                match rx.try_recv() {
                    Ok(update) => {
                        if let Some(price) = update.price.inner().to_f64() {
                            self.window.push(price);
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Lagged(skipped)) => {
                        warn!(skipped, "Price update stream lagged");
                    }
                    Err(TryRecvError::Closed) => {
                        closed = true;
                        break;
                    }
                }
            }
        }
        if closed {
            warn!(token = %self.config.token, "Price update stream closed");
            self.updates = None;
        }
    }
}
