use crate::energy::EnergyStats;

/// Running threshold estimate fed by one candidate per window.
///
/// The candidate sits `ratio` of the way into the window's squared-energy
/// spread. The estimate is an unweighted cumulative mean of every
/// candidate seen so far: early windows contribute exactly as much as
/// recent ones, so the threshold converges toward a global value rather
/// than tracking a drifting noise floor.
#[derive(Debug, Clone)]
pub struct AdaptiveThreshold {
    running: f64,
    updates: f64,
    ratio: f64,
}

impl AdaptiveThreshold {
    pub fn new(ratio: f64) -> Self {
        Self {
            running: 0.0,
            updates: 0.0,
            ratio,
        }
    }

    /// Fold one window's statistics into the running estimate and
    /// return the just-updated threshold. Verdicts must compare against
    /// this return value, not the pre-update estimate.
    pub fn observe(&mut self, stats: &EnergyStats) -> f64 {
        let candidate = stats.min + stats.spread() * self.ratio;
        self.running = (self.updates * self.running + candidate) / (self.updates + 1.0);
        self.updates += 1.0;
        self.running
    }

    pub fn current(&self) -> f64 {
        self.running
    }

    pub fn updates(&self) -> u64 {
        self.updates as u64
    }

    pub fn reset(&mut self) {
        self.running = 0.0;
        self.updates = 0.0;
    }
}
