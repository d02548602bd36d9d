//! End-to-end session tests against the synthetic feed and the paper
//! execution service.

use std::sync::Arc;

use rust_decimal_macros::dec;

use bomm_core::{Fill, MarketId, OrderSide, Price, Size, TokenId, VenueId};
use bomm_executor::PaperExecutionService;
use bomm_feed::SyntheticFeed;
use bomm_mm::{MakerSession, QuoterConfig, SessionStatus};

fn test_config() -> QuoterConfig {
    QuoterConfig::new(
        VenueId::new("paper"),
        MarketId::new("mkt"),
        TokenId::new("tok"),
    )
}

/// Feed pinned at mid 0.50 (zero walk step).
fn static_feed() -> Arc<SyntheticFeed> {
    Arc::new(SyntheticFeed::new(dec!(0.50), dec!(0), 1))
}

fn new_session(batch: bool) -> (MakerSession, Arc<PaperExecutionService>) {
    let exec = Arc::new(PaperExecutionService::new(batch));
    let mut session = MakerSession::new(test_config(), static_feed(), exec.clone());
    session.init();
    (session, exec)
}

#[tokio::test]
async fn test_quote_cancel_replace_cycle() {
    let (mut session, exec) = new_session(true);

    let signals = session.evaluate(0).await;
    assert_eq!(signals.len(), 6);
    assert_eq!(exec.open_order_count(), 6);
    assert_eq!(*session.status(), SessionStatus::Quoting);

    // Stable mid inside the interval: ladder left alone.
    assert!(session.evaluate(2_000).await.is_empty());
    assert_eq!(exec.open_order_count(), 6);

    // Interval elapsed: full cancel/replace, never stacking orders.
    let signals = session.evaluate(10_000).await;
    assert_eq!(signals.len(), 6);
    assert_eq!(exec.open_order_count(), 6);

    session.cleanup().await;
    assert_eq!(exec.open_order_count(), 0);
}

#[tokio::test]
async fn test_batch_and_sequential_modes_agree() {
    // Same market, same scripted per-order outcomes; only the venue's
    // batching capability differs.
    let (mut batch_session, batch_exec) = new_session(true);
    let (mut seq_session, seq_exec) = new_session(false);

    let outcomes = [true, false, true, true, true, false];
    batch_exec.script_outcomes(&outcomes);
    seq_exec.script_outcomes(&outcomes);

    let batch_signals = batch_session.evaluate(0).await;
    let seq_signals = seq_session.evaluate(0).await;

    assert_eq!(batch_signals.len(), 4);
    assert_eq!(batch_signals.len(), seq_signals.len());
    for (b, s) in batch_signals.iter().zip(seq_signals.iter()) {
        assert_eq!(b.side, s.side);
        assert_eq!(b.price, s.price);
        assert_eq!(b.size, s.size);
    }

    let batch_snap = batch_session.snapshot();
    let seq_snap = seq_session.snapshot();
    assert_eq!(batch_snap.resting_bids, seq_snap.resting_bids);
    assert_eq!(batch_snap.resting_asks, seq_snap.resting_asks);
    // Level 1 bid and level 2 ask were rejected.
    assert_eq!(batch_snap.resting_bids, 2);
    assert_eq!(batch_snap.resting_asks, 2);
    assert_eq!(batch_exec.open_order_count(), seq_exec.open_order_count());
}

#[tokio::test]
async fn test_loss_halt_is_terminal_across_ticks() {
    let mut config = test_config();
    config.max_loss_usd = dec!(5);
    let exec = Arc::new(PaperExecutionService::new(true));
    let mut session = MakerSession::new(config, static_feed(), exec.clone());
    session.init();

    session.evaluate(0).await;
    assert_eq!(*session.status(), SessionStatus::Quoting);

    // Buy 100 at 0.60 against fair value 0.50: -10 USD realized.
    session.on_trade(&Fill::new(
        TokenId::new("tok"),
        OrderSide::Buy,
        Price::new(dec!(0.60)),
        Size::new(dec!(100)),
    ));
    assert!(session.status().is_halted());

    for tick in 1..10u64 {
        assert!(session.evaluate(tick * 10_000).await.is_empty());
        assert!(session.status().is_halted());
    }

    // Further fills still update risk accounting but cannot revive it.
    session.on_trade(&Fill::new(
        TokenId::new("tok"),
        OrderSide::Sell,
        Price::new(dec!(0.55)),
        Size::new(dec!(100)),
    ));
    assert!(session.status().is_halted());
    assert_eq!(session.snapshot().fill_count, 2);
}

#[tokio::test]
async fn test_inventory_skew_shifts_requoted_ladder() {
    // Full skew factor so half the inventory limit moves quotes a
    // whole cent, surviving price rounding.
    let mut config = test_config();
    config.skew_factor = dec!(1);
    let exec = Arc::new(PaperExecutionService::new(true));
    let mut session = MakerSession::new(config, static_feed(), exec.clone());
    session.init();

    let flat = session.evaluate(0).await;
    let flat_best_bid = flat
        .iter()
        .filter(|s| s.side == OrderSide::Buy)
        .map(|s| s.price)
        .max()
        .unwrap();

    // Go long 250 shares, then requote after the interval.
    session.on_trade(&Fill::new(
        TokenId::new("tok"),
        OrderSide::Buy,
        Price::new(dec!(0.50)),
        Size::new(dec!(250)),
    ));
    let skewed = session.evaluate(10_000).await;
    let skewed_best_bid = skewed
        .iter()
        .filter(|s| s.side == OrderSide::Buy)
        .map(|s| s.price)
        .max()
        .unwrap();

    assert!(skewed_best_bid < flat_best_bid);
}
