//! Synthetic random-walk feed for paper-trading mode.
//!
//! Generates a bounded random walk of the mid-price inside the
//! (0.05, 0.95) band and builds a small book around it. Each
//! `fetch_book` call advances the walk one step and broadcasts the new
//! mid to subscribers, so the demo binary exercises the same code
//! paths a live feed would.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::broadcast;

use bomm_core::{BookLevel, OrderBookSnapshot, Price, Size};

use crate::{FeedResult, PriceFeed, PriceUpdate};

const BOOK_DEPTH: usize = 5;

struct WalkState {
    mid: Decimal,
    rng: StdRng,
}

/// Random-walk book generator implementing [`PriceFeed`].
pub struct SyntheticFeed {
    state: Mutex<WalkState>,
    /// Half the synthetic bid/ask spread in dollars.
    half_spread: Decimal,
    /// Maximum mid move per step in dollars.
    step: Decimal,
    tx: broadcast::Sender<PriceUpdate>,
}

impl SyntheticFeed {
    /// Create a feed starting at `mid` with the given per-step drift bound.
    pub fn new(mid: Decimal, step: Decimal, seed: u64) -> Self {
        let (tx, _) = broadcast::channel(256);
        Self {
            state: Mutex::new(WalkState {
                mid,
                rng: StdRng::seed_from_u64(seed),
            }),
            half_spread: dec!(0.01),
            step,
            tx,
        }
    }

    /// Advance the walk one step and return the new mid.
    fn advance(&self) -> Decimal {
        let mut state = self.state.lock();
        let step_f: f64 = state.rng.gen_range(-1.0..1.0);
        let delta = self.step * Decimal::from_f64_retain(step_f).unwrap_or(Decimal::ZERO);
        let next = (state.mid + delta).max(dec!(0.05)).min(dec!(0.95));
        state.mid = next;
        next
    }

    fn build_book(&self, mid: Decimal) -> OrderBookSnapshot {
        let mut bids = Vec::with_capacity(BOOK_DEPTH);
        let mut asks = Vec::with_capacity(BOOK_DEPTH);
        for i in 0..BOOK_DEPTH {
            let offset = self.half_spread + dec!(0.01) * Decimal::from(i as u32);
            let size = Size::new(dec!(100) * Decimal::from((i + 1) as u32));
            bids.push(BookLevel::new(Price::new(mid - offset), size));
            asks.push(BookLevel::new(Price::new(mid + offset), size));
        }
        OrderBookSnapshot::new(bids, asks, Price::new(mid))
    }
}

#[async_trait]
impl PriceFeed for SyntheticFeed {
    async fn fetch_book(&self) -> FeedResult<Option<OrderBookSnapshot>> {
        let mid = self.advance();
        // Ignore send errors: no subscribers is fine.
        let _ = self.tx.send(PriceUpdate::new(Price::new(mid)));
        Ok(Some(self.build_book(mid)))
    }

    fn subscribe(&self) -> broadcast::Receiver<PriceUpdate> {
        self.tx.subscribe()
    }
}
