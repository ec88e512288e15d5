use crate::carousel::{SlideIndex, Slides};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryItemKind {
    Image,
    Video,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub kind: GalleryItemKind,
    pub rotation: f32,
    pub scale: Option<f32>,
    pub z_index: i32,
}

/// One named category and its items, in display order.
#[derive(Clone, Debug)]
pub struct GalleryCategory {
    pub name: &'static str,
    pub items: Vec<GalleryItem>,
}

/// Active category plus position within it.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryView {
    category: String,
    index: SlideIndex,
}

impl GalleryView {
    pub fn new(category: &str, item_count: usize) -> Self {
        Self {
            category: category.to_string(),
            index: SlideIndex::new(item_count, true),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current(&self) -> usize {
        self.index.current()
    }

    pub fn len(&self) -> usize {
        self.index.total()
    }

    pub fn is_empty(&self) -> bool {
        self.index.total() == 0
    }

    pub fn next(&mut self) {
        self.index.next();
    }

    pub fn prev(&mut self) {
        self.index.prev();
    }

    pub fn go_to(&mut self, index: usize) {
        self.index.go_to(index);
    }

    /// Select another category. The position always starts over at 0.
    pub fn switch_category(&mut self, category: &str, item_count: usize) {
        self.category = category.to_string();
        self.index.set_total(item_count);
        self.index.reset();
    }

    /// Auto-advance only makes sense with something to advance to.
    pub fn can_autoplay(&self) -> bool {
        self.len() > 1
    }
}

impl Slides for GalleryView {
    fn current(&self) -> usize {
        GalleryView::current(self)
    }

    fn total(&self) -> usize {
        self.len()
    }

    fn next(&mut self) {
        GalleryView::next(self)
    }

    fn prev(&mut self) {
        GalleryView::prev(self)
    }

    fn go_to(&mut self, index: usize) {
        GalleryView::go_to(self, index)
    }

    fn can_prev(&self) -> bool {
        self.index.can_prev()
    }

    fn can_next(&self) -> bool {
        self.index.can_next()
    }

    fn can_autoplay(&self) -> bool {
        GalleryView::can_autoplay(self)
    }
}

/// Transform of one card in the stacked gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    pub translate_x: f32,
    pub translate_y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotation: f32,
    pub z_index: i32,
    pub is_active: bool,
}

impl CardPlacement {
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px) translateY({}px) rotate({}deg) scale({}); opacity: {}; z-index: {};",
            self.translate_x, self.translate_y, self.rotation, self.scale, self.opacity, self.z_index
        )
    }
}

/// Where card `index` sits when `current` is in front.
pub fn card_placement(item: &GalleryItem, index: usize, current: usize, len: usize) -> CardPlacement {
    let offset = if len == 0 { 0 } else { (index + len - current % len) % len };
    let (translate_x, translate_y, opacity, scale) = if offset == 0 {
        (0.0, 0.0, 1.0, 1.0)
    } else if offset == 1 {
        (180.0, 20.0, 0.7, item.scale.unwrap_or(0.9))
    } else if offset == len - 1 {
        (-180.0, 20.0, 0.7, item.scale.unwrap_or(0.9))
    } else {
        (0.0, 0.0, 0.0, 0.8)
    };
    let is_active = offset == 0;
    CardPlacement {
        translate_x,
        translate_y,
        opacity,
        scale,
        rotation: if is_active { 0.0 } else { item.rotation },
        z_index: if is_active { 30 } else { item.z_index.min(29) },
        is_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, scale: Option<f32>) -> GalleryItem {
        GalleryItem {
            id,
            title: "t",
            image: "/x.jpg",
            kind: GalleryItemKind::Image,
            rotation: 4.0,
            scale,
            z_index: 2,
        }
    }

    #[test]
    fn test_category_switch_resets_index() {
        let mut view = GalleryView::new("Ghana", 3);
        view.next();
        view.next();
        assert_eq!(view.current(), 2);
        view.switch_category("Kenya", 3);
        assert_eq!(view.current(), 0);
        assert_eq!(view.category(), "Kenya");
    }

    #[test]
    fn test_switch_to_same_category_also_resets() {
        let mut view = GalleryView::new("Lagos", 3);
        view.go_to(1);
        view.switch_category("Lagos", 3);
        assert_eq!(view.current(), 0);
    }

    #[test]
    fn test_gallery_wraps() {
        let mut view = GalleryView::new("Spain", 3);
        view.prev();
        assert_eq!(view.current(), 2);
        view.next();
        assert_eq!(view.current(), 0);
    }

    #[test]
    fn test_arrows_follow_item_count() {
        let mut view = GalleryView::new("Spain", 3);
        assert!(Slides::can_prev(&view) && Slides::can_next(&view));
        view.switch_category("Kenya", 1);
        assert!(!Slides::can_prev(&view) && !Slides::can_next(&view));
    }

    #[test]
    fn test_empty_category() {
        let view = GalleryView::new("Nowhere", 0);
        assert!(view.is_empty());
        assert!(!view.can_autoplay());
    }

    #[test]
    fn test_card_placement_neighbours() {
        let items = [item(1, None), item(2, Some(0.85)), item(3, None), item(4, None)];
        let active = card_placement(&items[1], 1, 1, 4);
        assert!(active.is_active);
        assert_eq!((active.translate_x, active.opacity, active.scale), (0.0, 1.0, 1.0));
        assert_eq!(active.z_index, 30);

        let right = card_placement(&items[2], 2, 1, 4);
        assert_eq!((right.translate_x, right.translate_y, right.scale), (180.0, 20.0, 0.9));

        let left = card_placement(&items[0], 0, 1, 4);
        assert_eq!(left.translate_x, -180.0);

        let hidden = card_placement(&items[3], 3, 1, 4);
        assert_eq!((hidden.opacity, hidden.scale), (0.0, 0.8));
    }

    #[test]
    fn test_neighbour_uses_item_scale() {
        let items = [item(1, None), item(2, Some(0.85))];
        let p = card_placement(&items[1], 1, 0, 2);
        assert_eq!(p.scale, 0.85);
    }
}
