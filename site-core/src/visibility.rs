/// Default intersection ratio that counts as "seen".
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Biography sliders wait until a fifth of the section is on screen.
pub const BIOGRAPHY_THRESHOLD: f64 = 0.2;

/// Observer threshold to request. Ratios outside `(0, 1]` fall back to
/// [`DEFAULT_THRESHOLD`].
pub fn effective_threshold(requested: f64) -> f64 {
    if requested > 0.0 && requested <= 1.0 {
        requested
    } else {
        DEFAULT_THRESHOLD
    }
}

/// One-shot visibility latch.
///
/// The first intersecting notification flips the latch to visible and asks
/// the caller to stop observing. Scrolling away afterwards never clears it:
/// carousels start autoplay once on first sight and are not re-gated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

/// What the observer owner should do after a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchOutcome {
    /// Just became visible; unobserve the target.
    Latched,
    /// Nothing changed.
    Ignored,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, is_intersecting: bool) -> LatchOutcome {
        if self.visible || !is_intersecting {
            return LatchOutcome::Ignored;
        }
        self.visible = true;
        LatchOutcome::Latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latches_once() {
        let mut latch = VisibilityLatch::new();
        assert_eq!(latch.observe(false), LatchOutcome::Ignored);
        assert!(!latch.is_visible());
        assert_eq!(latch.observe(true), LatchOutcome::Latched);
        assert!(latch.is_visible());
        assert_eq!(latch.observe(true), LatchOutcome::Ignored);
    }

    #[test]
    fn test_scrolling_away_keeps_latch() {
        let mut latch = VisibilityLatch::new();
        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_out_of_range_threshold_uses_default() {
        assert_eq!(effective_threshold(BIOGRAPHY_THRESHOLD), 0.2);
        assert_eq!(effective_threshold(1.0), 1.0);
        assert_eq!(effective_threshold(0.0), DEFAULT_THRESHOLD);
        assert_eq!(effective_threshold(-3.0), DEFAULT_THRESHOLD);
        assert_eq!(effective_threshold(f64::NAN), DEFAULT_THRESHOLD);
    }
}
