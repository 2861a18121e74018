//! Work catalog: the immutable, ordered list of gallery items

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::{Categorized, ALL_CATEGORIES};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate work item id: {0}")]
    DuplicateId(String),
    #[error("work item {id} has undeclared category {category:?}")]
    UnknownCategory { id: String, category: String },
    #[error("category {0:?} is declared more than once")]
    DuplicateCategory(String),
    #[error("\"All\" is reserved and cannot be declared as a category")]
    ReservedCategory,
}

/// How a work item is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
    Slideshow,
}

/// Kind-specific media. The enum shape keeps hover variants on images only and
/// slide lists on slideshows only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkMedia {
    Image {
        #[serde(default)]
        hover_source: Option<String>,
    },
    Video,
    Slideshow { slides: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub primary_source: String,
    #[serde(flatten)]
    pub media: WorkMedia,
}

impl WorkItem {
    pub fn image(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        primary_source: impl Into<String>,
        hover_source: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            primary_source: primary_source.into(),
            media: WorkMedia::Image {
                hover_source: hover_source.map(str::to_string),
            },
        }
    }

    pub fn video(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            primary_source: source.into(),
            media: WorkMedia::Video,
        }
    }

    /// A slideshow whose primary source is its first slide.
    pub fn slideshow(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        slides: Vec<String>,
    ) -> Self {
        let primary_source = slides.first().cloned().unwrap_or_default();
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            primary_source,
            media: WorkMedia::Slideshow { slides },
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self.media {
            WorkMedia::Image { .. } => MediaKind::Image,
            WorkMedia::Video => MediaKind::Video,
            WorkMedia::Slideshow { .. } => MediaKind::Slideshow,
        }
    }

    pub fn hover_source(&self) -> Option<&str> {
        match &self.media {
            WorkMedia::Image { hover_source } => hover_source.as_deref(),
            _ => None,
        }
    }

    /// Slide list, present only for slideshows.
    pub fn slides(&self) -> Option<&[String]> {
        match &self.media {
            WorkMedia::Slideshow { slides } => Some(slides),
            _ => None,
        }
    }
}

impl Categorized for WorkItem {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Ordered, validated set of work items plus the closed category set they
/// draw from. Built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    categories: Vec<String>,
    items: Vec<WorkItem>,
}

impl Catalog {
    pub fn new(categories: Vec<String>, items: Vec<WorkItem>) -> Result<Self, CatalogError> {
        let mut declared = HashSet::new();
        for category in &categories {
            if category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory);
            }
            if !declared.insert(category.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.clone()));
            }
        }

        let mut ids = HashSet::new();
        for item in &items {
            if !ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if !declared.contains(item.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    id: item.id.clone(),
                    category: item.category.clone(),
                });
            }
        }

        Ok(Self { categories, items })
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Filter options in display order, starting with "All".
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Slideshow items paired with their slide lists.
    pub fn slideshows(&self) -> impl Iterator<Item = (&WorkItem, &[String])> {
        self.items
            .iter()
            .filter_map(|item| item.slides().map(|slides| (item, slides)))
    }

    /// Authored-data problems that are tolerated rather than rejected.
    pub fn warnings(&self) -> Vec<String> {
        self.slideshows()
            .filter(|(_, slides)| slides.is_empty())
            .map(|(item, _)| format!("slideshow {} has no slides", item.id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["3D Art".into(), "Line Art".into()]
    }

    #[test]
    fn test_kind_follows_media() {
        let image = WorkItem::image("i", "I", "3D Art", "/i1.jpg", Some("/i2.jpg"));
        let video = WorkItem::video("v", "V", "3D Art", "/v.mp4");
        let slides = WorkItem::slideshow("s", "S", "Line Art", vec!["/s1.jpg".into()]);
        assert_eq!(image.kind(), MediaKind::Image);
        assert_eq!(video.kind(), MediaKind::Video);
        assert_eq!(slides.kind(), MediaKind::Slideshow);
        assert_eq!(image.hover_source(), Some("/i2.jpg"));
        assert_eq!(image.slides(), None);
        assert_eq!(slides.hover_source(), None);
        assert_eq!(slides.primary_source, "/s1.jpg");
    }

    #[test]
    fn test_new_accepts_valid_catalog() {
        let catalog = Catalog::new(
            categories(),
            vec![
                WorkItem::image("a", "A", "3D Art", "/a.jpg", None),
                WorkItem::video("b", "B", "Line Art", "/b.mp4"),
            ],
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b").unwrap().title, "B");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(
            categories(),
            vec![
                WorkItem::video("a", "A", "3D Art", "/a.mp4"),
                WorkItem::video("a", "A again", "3D Art", "/a2.mp4"),
            ],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".into()));
    }

    #[test]
    fn test_undeclared_category_rejected() {
        let err = Catalog::new(
            categories(),
            vec![WorkItem::video("a", "A", "Sculpture", "/a.mp4")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn test_all_cannot_be_declared() {
        let err = Catalog::new(vec!["All".into()], vec![]).unwrap_err();
        assert_eq!(err, CatalogError::ReservedCategory);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = Catalog::new(vec!["3D Art".into(), "3D Art".into()], vec![]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory("3D Art".into()));
    }

    #[test]
    fn test_category_options_start_with_all() {
        let catalog = Catalog::new(categories(), vec![]).unwrap();
        assert_eq!(catalog.category_options(), vec!["All", "3D Art", "Line Art"]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_empty_slideshow_is_a_warning() {
        let catalog = Catalog::new(
            categories(),
            vec![WorkItem::slideshow("s", "S", "Line Art", vec![])],
        )
        .unwrap();
        assert_eq!(catalog.warnings(), vec!["slideshow s has no slides"]);
        assert_eq!(catalog.slideshows().count(), 1);
    }

    #[test]
    fn test_yaml_shape() {
        let yaml = r#"
- id: d1
  title: Dragon
  category: Line Art
  primary_source: /d1.jpg
  kind: image
  hover_source: /d2.jpg
- id: s1
  title: Series
  category: Line Art
  primary_source: /s1.jpg
  kind: slideshow
  slides: [/s1.jpg, /s2.jpg]
"#;
        let items: Vec<WorkItem> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(items[0].hover_source(), Some("/d2.jpg"));
        assert_eq!(items[1].slides().map(<[String]>::len), Some(2));
    }
}
