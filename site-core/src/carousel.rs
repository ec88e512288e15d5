use crate::visibility::BIOGRAPHY_THRESHOLD;

/// Current position within a fixed-size set of slides.
///
/// With `infinite_loop` the index wraps modulo `total`; without it the index
/// is clamped to `[0, total - 1]` and stepping past either end does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    total: usize,
    infinite_loop: bool,
}

impl SlideIndex {
    pub fn new(total: usize, infinite_loop: bool) -> Self {
        Self { current: 0, total, infinite_loop }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn infinite_loop(&self) -> bool {
        self.infinite_loop
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = if self.infinite_loop {
            (self.current + 1) % self.total
        } else {
            (self.current + 1).min(self.total - 1)
        };
    }

    pub fn prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = if self.infinite_loop {
            (self.current + self.total - 1) % self.total
        } else {
            self.current.saturating_sub(1)
        };
    }

    /// Jump straight to `index`. Callers pass indices from the dot buttons,
    /// which are generated from the slide list, so no bounds check is done.
    pub fn go_to(&mut self, index: usize) {
        self.current = index;
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Replace the slide count. The index is kept when it is still in range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if self.current >= total {
            self.current = 0;
        }
    }

    pub fn can_prev(&self) -> bool {
        if self.infinite_loop {
            self.total > 1
        } else {
            self.current > 0
        }
    }

    pub fn can_next(&self) -> bool {
        if self.infinite_loop {
            self.total > 1
        } else {
            self.current + 1 < self.total
        }
    }

    /// Whether `index` sits immediately before the current slide (with wraparound).
    pub fn is_prev(&self, index: usize) -> bool {
        self.total > 1 && index == (self.current + self.total - 1) % self.total
    }

    /// Whether `index` sits immediately after the current slide (with wraparound).
    pub fn is_next(&self, index: usize) -> bool {
        self.total > 1 && index == (self.current + 1) % self.total
    }
}

/// Anything a carousel can step through.
pub trait Slides {
    fn current(&self) -> usize;
    fn total(&self) -> usize;
    fn next(&mut self);
    fn prev(&mut self);
    fn go_to(&mut self, index: usize);
    /// Whether the back button does anything. False at the lower bound of a clamped set.
    fn can_prev(&self) -> bool;
    fn can_next(&self) -> bool;

    /// Auto-advance needs somewhere to advance to.
    fn can_autoplay(&self) -> bool {
        self.total() > 1
    }
}

impl Slides for SlideIndex {
    fn current(&self) -> usize {
        SlideIndex::current(self)
    }

    fn total(&self) -> usize {
        SlideIndex::total(self)
    }

    fn next(&mut self) {
        SlideIndex::next(self)
    }

    fn prev(&mut self) {
        SlideIndex::prev(self)
    }

    fn go_to(&mut self, index: usize) {
        SlideIndex::go_to(self, index)
    }

    fn can_prev(&self) -> bool {
        SlideIndex::can_prev(self)
    }

    fn can_next(&self) -> bool {
        SlideIndex::can_next(self)
    }
}

/// Position of a slide relative to the active one, used for transition classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Active,
    Previous,
    Next,
    Hidden,
}

impl SlidePhase {
    pub fn of(index: &SlideIndex, slide: usize) -> Self {
        if slide == index.current() {
            Self::Active
        } else if index.is_prev(slide) {
            Self::Previous
        } else if index.is_next(slide) {
            Self::Next
        } else {
            Self::Hidden
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "slide active",
            Self::Previous => "slide prev",
            Self::Next => "slide next",
            Self::Hidden => "slide hidden",
        }
    }
}

/// Behaviour knobs for one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u32,
    pub infinite_loop: bool,
    pub show_dots: bool,
    pub show_arrows: bool,
    pub swipe: bool,
    pub keyboard: bool,
    pub pause_on_hover: bool,
    /// Intersection threshold for the visibility gate. `None` means the
    /// carousel is treated as always in view.
    pub visibility_threshold: Option<f64>,
    /// Re-arm the autoplay period whenever the index changes by hand.
    pub restart_on_navigate: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselKind::Biography.config()
    }
}

/// The carousels that appear on the site. Each variant picks a config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKind {
    /// About-page biography sliders.
    Biography,
    /// Photo strip on the Visit page.
    ChurchTour,
    /// Stacked-card category gallery.
    Gallery,
    /// Rotating tagline in the home hero.
    HeroPhrases,
}

impl CarouselKind {
    pub fn config(self) -> CarouselConfig {
        match self {
            Self::Biography => CarouselConfig {
                autoplay_interval_ms: 5000,
                infinite_loop: true,
                show_dots: true,
                show_arrows: true,
                swipe: true,
                keyboard: true,
                pause_on_hover: false,
                visibility_threshold: Some(BIOGRAPHY_THRESHOLD),
                restart_on_navigate: false,
            },
            Self::ChurchTour => CarouselConfig {
                autoplay_interval_ms: 4000,
                infinite_loop: true,
                show_dots: true,
                show_arrows: true,
                swipe: false,
                keyboard: false,
                pause_on_hover: true,
                visibility_threshold: None,
                restart_on_navigate: false,
            },
            Self::Gallery => CarouselConfig {
                autoplay_interval_ms: 5000,
                infinite_loop: true,
                show_dots: true,
                show_arrows: true,
                swipe: true,
                keyboard: true,
                pause_on_hover: true,
                visibility_threshold: None,
                restart_on_navigate: true,
            },
            Self::HeroPhrases => CarouselConfig {
                autoplay_interval_ms: 3000,
                infinite_loop: true,
                show_dots: false,
                show_arrows: false,
                swipe: false,
                keyboard: false,
                pause_on_hover: false,
                visibility_threshold: None,
                restart_on_navigate: false,
            },
        }
    }
}

/// What a key press on the window should do to a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Prev,
    Next,
    ToggleAutoplay,
}

impl KeyAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            " " => Some(Self::ToggleAutoplay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_next_wraps_to_start() {
        for total in 1..12 {
            let mut idx = SlideIndex::new(total, true);
            for _ in 0..total {
                idx.next();
            }
            assert_eq!(idx.current(), 0, "total={total}");
        }
    }

    #[test]
    fn test_clamped_next_stops_at_last() {
        for total in 1..12 {
            let mut idx = SlideIndex::new(total, false);
            for _ in 0..total + 5 {
                idx.next();
            }
            assert_eq!(idx.current(), total - 1, "total={total}");
            assert!(!idx.can_next());
        }
    }

    #[test]
    fn test_clamped_prev_is_noop_at_zero() {
        let mut idx = SlideIndex::new(4, false);
        assert!(!idx.can_prev());
        idx.prev();
        assert_eq!(idx.current(), 0);
    }

    #[test]
    fn test_infinite_prev_wraps_to_end() {
        let mut idx = SlideIndex::new(10, true);
        idx.prev();
        assert_eq!(idx.current(), 9);
        assert!(idx.can_prev());
    }

    #[test]
    fn test_empty_set_never_moves() {
        let mut idx = SlideIndex::new(0, true);
        idx.next();
        idx.prev();
        assert_eq!(idx.current(), 0);
        assert!(!idx.can_next());
    }

    #[test]
    fn test_go_to_sets_index_directly() {
        let mut idx = SlideIndex::new(10, true);
        idx.go_to(7);
        assert_eq!(idx.current(), 7);
        idx.next();
        assert_eq!(idx.current(), 8);
    }

    #[test]
    fn test_set_total_resets_out_of_range_index() {
        let mut idx = SlideIndex::new(5, true);
        idx.go_to(4);
        idx.set_total(3);
        assert_eq!(idx.current(), 0);
        idx.go_to(1);
        idx.set_total(6);
        assert_eq!(idx.current(), 1);
    }

    #[test]
    fn test_slide_phase_neighbours_wrap() {
        let idx = SlideIndex::new(5, true);
        assert_eq!(SlidePhase::of(&idx, 0), SlidePhase::Active);
        assert_eq!(SlidePhase::of(&idx, 4), SlidePhase::Previous);
        assert_eq!(SlidePhase::of(&idx, 1), SlidePhase::Next);
        assert_eq!(SlidePhase::of(&idx, 2), SlidePhase::Hidden);
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(KeyAction::from_key("ArrowLeft"), Some(KeyAction::Prev));
        assert_eq!(KeyAction::from_key(" "), Some(KeyAction::ToggleAutoplay));
        assert_eq!(KeyAction::from_key("Enter"), None);
    }

    #[test]
    fn test_single_slide_never_autoplays() {
        fn step<S: Slides>(slides: &mut S) -> bool {
            if slides.can_autoplay() {
                slides.next();
            }
            slides.can_autoplay()
        }
        assert!(!step(&mut SlideIndex::new(1, true)));
        let mut two = SlideIndex::new(2, true);
        assert!(step(&mut two));
        assert_eq!(Slides::current(&two), 1);
    }

    fn step_back<S: Slides>(slides: &mut S) {
        if slides.can_prev() {
            slides.prev();
        }
    }

    #[test]
    fn test_clamped_bounds_disable_buttons_through_trait() {
        let mut idx = SlideIndex::new(3, false);
        assert!(!Slides::can_prev(&idx));
        assert!(Slides::can_next(&idx));
        step_back(&mut idx);
        assert_eq!(Slides::current(&idx), 0);

        Slides::next(&mut idx);
        Slides::next(&mut idx);
        assert!(Slides::can_prev(&idx));
        assert!(!Slides::can_next(&idx));
        Slides::next(&mut idx);
        assert_eq!(Slides::current(&idx), 2);

        let looping = SlideIndex::new(3, true);
        assert!(Slides::can_prev(&looping) && Slides::can_next(&looping));
        let single = SlideIndex::new(1, true);
        assert!(!Slides::can_prev(&single) && !Slides::can_next(&single));
    }
}
