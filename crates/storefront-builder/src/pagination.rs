//! Pagination and carousel state.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Page state for a product list. Pages are numbered from 1.
///
/// # Example
///
/// ```rust
/// use storefront_builder::Paginator;
///
/// let mut pages = Paginator::new(23, 10);
/// assert_eq!(pages.page_count(), 3);
///
/// pages.go_to(99);
/// assert_eq!(pages.current(), 3);
/// assert_eq!(pages.item_range(), 20..23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    total_items: usize,
    per_page: usize,
    current: usize,
}

impl Paginator {
    /// Starts on page 1. A `per_page` of zero is treated as one.
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page: per_page.max(1),
            current: 1,
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages. An empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.per_page.max(1)).max(1)
    }

    /// Moves to `page`, clamped to `1..=page_count`.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.page_count());
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Advances one page. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Goes back one page. Returns false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Indices of the items on the current page.
    pub fn item_range(&self) -> Range<usize> {
        let start = (self.current.saturating_sub(1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// Updates the item count (after filtering, say), keeping the current
    /// page when it still exists.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.go_to(self.current);
    }

    /// The slice of `items` shown on the current page.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

/// Slide state for a carousel showing `visible` slides at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel {
    len: usize,
    visible: usize,
    index: usize,
    looping: bool,
}

impl Carousel {
    /// A carousel over `len` slides. `visible` is at least one.
    pub fn new(len: usize, visible: usize) -> Self {
        Self {
            len,
            visible: visible.max(1),
            index: 0,
            looping: false,
        }
    }

    /// Enables wrap-around navigation.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the first visible slide.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Highest start index that still fills the viewport.
    fn max_start(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    /// Advances one slide, wrapping when looping.
    pub fn next_slide(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.looping {
            (self.index + 1) % self.len
        } else {
            (self.index + 1).min(self.max_start())
        };
    }

    /// Goes back one slide, wrapping when looping.
    pub fn prev_slide(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = match (self.index, self.looping) {
            (0, true) => self.len - 1,
            (0, false) => 0,
            (i, _) => i - 1,
        };
    }

    /// Jumps to a slide, wrapped or clamped like [`next_slide`](Self::next_slide).
    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = if self.looping {
            index % self.len
        } else {
            index.min(self.max_start())
        };
    }

    pub fn can_next(&self) -> bool {
        self.len > 0 && (self.looping || self.index < self.max_start())
    }

    pub fn can_prev(&self) -> bool {
        self.len > 0 && (self.looping || self.index > 0)
    }

    /// Indices of the visible slides, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        let count = self.visible.min(self.len);
        if self.looping {
            (0..count).map(|k| (self.index + k) % self.len).collect()
        } else {
            (self.index..(self.index + count).min(self.len)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(Paginator::new(0, 10).page_count(), 1);
        assert_eq!(Paginator::new(10, 10).page_count(), 1);
        assert_eq!(Paginator::new(11, 10).page_count(), 2);
        assert_eq!(Paginator::new(5, 0).page_count(), 5);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut pages = Paginator::new(25, 10);
        assert!(!pages.prev_page());
        assert!(pages.next_page());
        assert!(pages.next_page());
        assert!(!pages.next_page());
        assert_eq!(pages.current(), 3);
        pages.go_to(0);
        assert_eq!(pages.current(), 1);
    }

    #[test]
    fn test_item_range() {
        let mut pages = Paginator::new(25, 10);
        assert_eq!(pages.item_range(), 0..10);
        pages.go_to(3);
        assert_eq!(pages.item_range(), 20..25);
        assert_eq!(Paginator::new(0, 10).item_range(), 0..0);
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut pages = Paginator::new(50, 10);
        pages.go_to(5);
        pages.set_total_items(12);
        assert_eq!(pages.current(), 2);
    }

    #[test]
    fn test_page_of() {
        let items: Vec<u32> = (0..7).collect();
        let mut pages = Paginator::new(items.len(), 3);
        pages.go_to(3);
        assert_eq!(pages.page_of(&items), &[6]);
    }

    #[test]
    fn test_carousel_clamped() {
        let mut carousel = Carousel::new(5, 2);
        for _ in 0..10 {
            carousel.next_slide();
        }
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.visible_indices(), vec![3, 4]);
        assert!(!carousel.can_next());
        carousel.prev_slide();
        assert_eq!(carousel.index(), 2);
        carousel.go_to(0);
        carousel.prev_slide();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.can_prev());
    }

    #[test]
    fn test_carousel_looping() {
        let mut carousel = Carousel::new(4, 3).looping(true);
        carousel.prev_slide();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.visible_indices(), vec![3, 0, 1]);
        carousel.next_slide();
        assert_eq!(carousel.index(), 0);
        carousel.go_to(9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_carousel_more_visible_than_slides() {
        let carousel = Carousel::new(2, 5);
        assert_eq!(carousel.visible_indices(), vec![0, 1]);
        assert!(!carousel.can_next());
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0, 3).looping(true);
        carousel.next_slide();
        carousel.prev_slide();
        carousel.go_to(4);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.visible_indices().is_empty());
        assert!(carousel.is_empty());
    }
}
