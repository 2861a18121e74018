//! folio-common - Pure gallery logic for the portfolio site
//!
//! Contains the work catalog, category filtering, slideshow rotation and the
//! gallery state reducer. Nothing here touches the UI; the view crate binds
//! these types to components.

pub mod catalog;
pub mod category;
pub mod config;
pub mod contact;
pub mod display;
#[cfg(not(target_arch = "wasm32"))]
pub mod driver;
pub mod gallery;
pub mod projects;
pub mod rotation;

pub use catalog::{Catalog, CatalogError, MediaKind, WorkItem, WorkMedia};
pub use category::{category_counts, count_in_category, filter_by_category, Categorized, ALL_CATEGORIES};
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactField, ContactMessage};
pub use display::{display_source, DisplaySource, VideoPlayback};
#[cfg(not(target_arch = "wasm32"))]
pub use driver::{DriverError, GalleryDriver};
pub use gallery::{FrameEntry, GalleryEvent, GalleryFrame, GalleryState};
pub use projects::{find_project, Project, TechPreview};
pub use rotation::{RotationState, SlideshowRotator};
