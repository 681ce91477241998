/// Wall-clock rate limiter.
///
/// Stores the time of the last transition and reports readiness once strictly
/// more than `interval_ms` has passed since then. The gate starts with a last
/// transition at time 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceGate {
    interval_ms: u64,
    last_ms: u64,
}

impl CadenceGate {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }

    pub fn is_ready(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_ms) > self.interval_ms
    }

    /// Record a transition at `now_ms`.
    pub fn mark(&mut self, now_ms: u64) {
        self.last_ms = now_ms;
    }

    /// Check readiness and, if ready, record the transition.
    pub fn try_pass(&mut self, now_ms: u64) -> bool {
        if self.is_ready(now_ms) {
            self.mark(now_ms);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_requires_strictly_more_than_interval() {
        let mut g = CadenceGate::new(66);
        assert!(!g.try_pass(0));
        assert!(!g.try_pass(66));
        assert!(g.try_pass(67));
        assert_eq!(g.last_ms(), 67);
        assert!(!g.try_pass(100));
        assert!(g.try_pass(134));
    }

    #[test]
    fn clock_going_backwards_is_not_ready() {
        let mut g = CadenceGate::new(10);
        g.mark(500);
        assert!(!g.is_ready(100));
    }
}
