//! Gallery state reducer
//!
//! One `GalleryState` exists per mounted gallery view and is dropped with it.
//! Two producers feed it: user input (category selection, pointer hover) and
//! the rotation timer. Events are applied strictly in arrival order.

use tracing::debug;

use crate::catalog::{Catalog, MediaKind};
use crate::category::{filter_by_category, ALL_CATEGORIES};
use crate::display::{display_source, DisplaySource};
use crate::rotation::SlideshowRotator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    SelectCategory(String),
    Tick,
    PointerEnter(String),
    PointerLeave(String),
    Teardown,
}

/// One rendered tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub kind: MediaKind,
    pub source: DisplaySource,
}

/// Filtered sequence plus per-item display source, ready to paint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryFrame {
    pub selected: String,
    pub entries: Vec<FrameEntry>,
}

impl GalleryFrame {
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&FrameEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    catalog: Catalog,
    selected: String,
    hovered: Option<String>,
    rotator: SlideshowRotator,
}

impl GalleryState {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selection(catalog, ALL_CATEGORIES)
    }

    pub fn with_selection(catalog: Catalog, selected: impl Into<String>) -> Self {
        Self {
            catalog,
            selected: selected.into(),
            hovered: None,
            rotator: SlideshowRotator::new(),
        }
    }

    /// Apply one event. Returns whether any observable state changed.
    pub fn apply(&mut self, event: GalleryEvent) -> bool {
        match event {
            GalleryEvent::SelectCategory(label) => {
                if self.selected == label {
                    return false;
                }
                debug!("Gallery category selected: {}", label);
                self.selected = label;
                true
            }
            GalleryEvent::Tick => self.rotator.tick(&self.catalog),
            GalleryEvent::PointerEnter(id) => {
                if self.hovered.as_deref() == Some(id.as_str()) {
                    return false;
                }
                self.hovered = Some(id);
                true
            }
            GalleryEvent::PointerLeave(id) => {
                if self.hovered.as_deref() != Some(id.as_str()) {
                    return false;
                }
                self.hovered = None;
                true
            }
            GalleryEvent::Teardown => {
                if !self.rotator.is_active() {
                    return false;
                }
                debug!("Gallery torn down after {} ticks", self.rotator.ticks());
                self.rotator.teardown();
                true
            }
        }
    }

    pub fn frame(&self) -> GalleryFrame {
        let entries = filter_by_category(self.catalog.items(), &self.selected)
            .into_iter()
            .map(|item| {
                let hovered = self.hovered.as_deref() == Some(item.id.as_str());
                FrameEntry {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    category: item.category.clone(),
                    kind: item.kind(),
                    source: display_source(item, self.rotator.state(), hovered),
                }
            })
            .collect();
        GalleryFrame {
            selected: self.selected.clone(),
            entries,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn rotator(&self) -> &SlideshowRotator {
        &self.rotator
    }
}
