use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Catalog;

/// Current slide index per slideshow item id.
///
/// Absent entries read as index 0. Entries are created on first advance and
/// never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RotationState {
    indices: HashMap<String, usize>,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_of(&self, id: &str) -> usize {
        self.indices.get(id).copied().unwrap_or(0)
    }

    /// Move `id` one slide forward in a cycle of `len`. A zero-length cycle is
    /// left untouched.
    pub fn advance(&mut self, id: &str, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let next = (self.index_of(id) + 1) % len;
        self.indices.insert(id.to_string(), next);
        true
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Advances every slideshow in a catalog on a shared tick.
///
/// Rotation is catalog-wide: items hidden by the current filter keep turning,
/// so switching categories never makes a slideshow jump. After `teardown`
/// the rotator is inert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideshowRotator {
    state: RotationState,
    ticks: u64,
    active: bool,
}

impl Default for SlideshowRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideshowRotator {
    pub fn new() -> Self {
        Self {
            state: RotationState::new(),
            ticks: 0,
            active: true,
        }
    }

    /// Apply one tick. Returns false once torn down.
    pub fn tick(&mut self, catalog: &Catalog) -> bool {
        if !self.active {
            debug!("Ignoring slideshow tick after teardown");
            return false;
        }
        self.ticks += 1;
        for (item, slides) in catalog.slideshows() {
            if !self.state.advance(&item.id, slides.len()) {
                debug!("Skipping slideshow {} with no slides", item.id);
            }
        }
        true
    }

    pub fn teardown(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn index_of(&self, id: &str) -> usize {
        self.state.index_of(id)
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WorkItem;

    fn slides(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("/slide-{i}.jpg")).collect()
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec!["Line Art".into(), "Traditional Art".into()],
            vec![
                WorkItem::slideshow("five", "Five", "Line Art", slides(5)),
                WorkItem::slideshow("three", "Three", "Traditional Art", slides(3)),
                WorkItem::slideshow("one", "One", "Traditional Art", slides(1)),
                WorkItem::image("img", "Img", "Line Art", "/img.jpg", None),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_absent_entry_reads_zero() {
        let state = RotationState::new();
        assert_eq!(state.index_of("anything"), 0);
        assert!(state.is_empty());
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = RotationState::new();
        assert!(state.advance("x", 2));
        assert_eq!(state.index_of("x"), 1);
        assert!(state.advance("x", 2));
        assert_eq!(state.index_of("x"), 0);
    }

    #[test]
    fn test_advance_zero_len_is_noop() {
        let mut state = RotationState::new();
        assert!(!state.advance("x", 0));
        assert!(state.is_empty());
    }

    #[test]
    fn test_index_is_ticks_mod_len() {
        let catalog = catalog();
        let mut rotator = SlideshowRotator::new();
        for m in 0..23u64 {
            assert_eq!(rotator.index_of("five"), (m % 5) as usize, "after {m} ticks");
            assert_eq!(rotator.index_of("three"), (m % 3) as usize, "after {m} ticks");
            assert_eq!(rotator.index_of("one"), 0);
            rotator.tick(&catalog);
        }
        assert_eq!(rotator.ticks(), 23);
    }

    #[test]
    fn test_only_slideshows_get_entries() {
        let catalog = catalog();
        let mut rotator = SlideshowRotator::new();
        rotator.tick(&catalog);
        assert_eq!(rotator.state().len(), 3);
        assert_eq!(rotator.index_of("img"), 0);
    }

    #[test]
    fn test_empty_slides_are_skipped() {
        let catalog = Catalog::new(
            vec!["Line Art".into()],
            vec![
                WorkItem::slideshow("empty", "Empty", "Line Art", vec![]),
                WorkItem::slideshow("two", "Two", "Line Art", slides(2)),
            ],
        )
        .unwrap();
        let mut rotator = SlideshowRotator::new();
        assert!(rotator.tick(&catalog));
        assert_eq!(rotator.index_of("empty"), 0);
        assert_eq!(rotator.index_of("two"), 1);
    }

    #[test]
    fn test_no_mutation_after_teardown() {
        let catalog = catalog();
        let mut rotator = SlideshowRotator::new();
        rotator.tick(&catalog);
        rotator.tick(&catalog);
        rotator.teardown();

        let before = rotator.clone();
        assert!(!rotator.tick(&catalog));
        assert_eq!(rotator, before);
        assert!(!rotator.is_active());
    }
}
