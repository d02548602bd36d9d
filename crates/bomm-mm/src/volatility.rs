//! Rolling fair-value volatility.
//!
//! Maintains a bounded history of fair-value observations and reports
//! the population standard deviation of their simple returns.
//! Statistics run in f64: exact decimal arithmetic buys nothing for a
//! dispersion estimate and `Decimal` has no sqrt.

use std::collections::VecDeque;

/// Maximum number of retained fair-value samples.
pub const MAX_SAMPLES: usize = 200;

/// Bounded rolling window of fair-value observations.
#[derive(Debug)]
pub struct VolatilityWindow {
    samples: VecDeque<f64>,
    max_samples: usize,
}

impl Default for VolatilityWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl VolatilityWindow {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SAMPLES)
    }

    pub fn with_capacity(max_samples: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(max_samples),
            max_samples,
        }
    }

    /// Record a fair-value observation.
    ///
    /// Non-finite or non-positive samples are dropped: they cannot be
    /// a market price and would poison the return series.
    pub fn push(&mut self, sample: f64) {
        if !sample.is_finite() || sample <= 0.0 {
            return;
        }
        self.samples.push_back(sample);
        while self.samples.len() > self.max_samples {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Population standard deviation of simple returns.
    ///
    /// Fewer than 2 samples yields zero.
    pub fn volatility(&self) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }

        let returns: Vec<f64> = self
            .samples
            .iter()
            .zip(self.samples.iter().skip(1))
            .map(|(prev, next)| (next - prev) / prev)
            .collect();

        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        let variance = returns
            .iter()
            .map(|r| {
                let d = r - mean;
                d * d
            })
            .sum::<f64>()
            / returns.len() as f64;

        variance.sqrt()
    }
}
