/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left; advance.
    Left,
    /// Finger moved left-to-right; go back.
    Right,
}

/// Tracks a single-finger horizontal swipe.
///
/// A coordinate of exactly zero is treated as unset, so a touch-end without
/// any touch-move in between is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    end_x: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, client_x: f64) {
        self.start_x = client_x;
        self.end_x = 0.0;
    }

    pub fn touch_move(&mut self, client_x: f64) {
        self.end_x = client_x;
    }

    /// Finish the gesture and report the swipe, if any. Both coordinates are
    /// cleared so the next gesture starts fresh.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let (start, end) = (self.start_x, self.end_x);
        self.start_x = 0.0;
        self.end_x = 0.0;
        if start == 0.0 || end == 0.0 {
            return None;
        }
        let distance = start - end;
        if distance > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Left)
        } else if distance < -SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SlideIndex;

    fn swipe(tracker: &mut SwipeTracker, from: f64, to: f64) -> Option<SwipeDirection> {
        tracker.touch_start(from);
        tracker.touch_move(to);
        tracker.touch_end()
    }

    #[test]
    fn test_long_left_swipe_advances_once() {
        let mut tracker = SwipeTracker::new();
        let mut idx = SlideIndex::new(5, true);
        let mut calls = 0;
        if let Some(SwipeDirection::Left) = swipe(&mut tracker, 200.0, 100.0) {
            idx.next();
            calls += 1;
        }
        assert_eq!(calls, 1);
        assert_eq!(idx.current(), 1);
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(swipe(&mut tracker, 200.0, 180.0), None);
    }

    #[test]
    fn test_right_swipe() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(swipe(&mut tracker, 100.0, 220.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_exact_threshold_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(swipe(&mut tracker, 150.0, 100.0), None);
    }

    #[test]
    fn test_end_without_move_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn test_stale_end_is_not_reused() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(swipe(&mut tracker, 300.0, 100.0), Some(SwipeDirection::Left));
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn test_zero_start_short_circuits() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(swipe(&mut tracker, 0.0, 200.0), None);
    }
}
