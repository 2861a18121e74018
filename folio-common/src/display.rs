//! Picks the media reference a gallery tile should show right now

use crate::catalog::{WorkItem, WorkMedia};
use crate::rotation::RotationState;

/// Playback flags handed to the media element for video tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoPlayback {
    pub looped: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub inline: bool,
}

impl Default for VideoPlayback {
    fn default() -> Self {
        Self {
            looped: true,
            muted: true,
            autoplay: true,
            inline: true,
        }
    }
}

/// What to render for one tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplaySource {
    Image {
        src: String,
        /// True when the hover variant is shown instead of the primary image
        showing_variant: bool,
    },
    Video {
        src: String,
        playback: VideoPlayback,
    },
    Slide {
        src: String,
        index: usize,
        count: usize,
    },
    /// Slideshow with no slides and no cover; nothing to load
    Missing,
}

impl DisplaySource {
    pub fn src(&self) -> Option<&str> {
        match self {
            DisplaySource::Image { src, .. }
            | DisplaySource::Video { src, .. }
            | DisplaySource::Slide { src, .. } => Some(src),
            DisplaySource::Missing => None,
        }
    }
}

pub fn display_source(item: &WorkItem, rotation: &RotationState, hovered: bool) -> DisplaySource {
    match &item.media {
        WorkMedia::Video => DisplaySource::Video {
            src: item.primary_source.clone(),
            playback: VideoPlayback::default(),
        },
        WorkMedia::Image { hover_source } => match hover_source {
            Some(variant) if hovered => DisplaySource::Image {
                src: variant.clone(),
                showing_variant: true,
            },
            _ => DisplaySource::Image {
                src: item.primary_source.clone(),
                showing_variant: false,
            },
        },
        WorkMedia::Slideshow { slides } => {
            let index = rotation.index_of(&item.id);
            match slides.get(index) {
                Some(src) => DisplaySource::Slide {
                    src: src.clone(),
                    index,
                    count: slides.len(),
                },
                None if item.primary_source.is_empty() => DisplaySource::Missing,
                None => DisplaySource::Slide {
                    src: item.primary_source.clone(),
                    index: 0,
                    count: slides.len(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_uses_primary_with_looped_muted_autoplay() {
        let item = WorkItem::video("v", "V", "3D Art", "/anim.mp4");
        let source = display_source(&item, &RotationState::new(), true);
        assert_eq!(
            source,
            DisplaySource::Video {
                src: "/anim.mp4".into(),
                playback: VideoPlayback {
                    looped: true,
                    muted: true,
                    autoplay: true,
                    inline: true,
                },
            }
        );
    }

    #[test]
    fn test_image_swaps_on_hover() {
        let item = WorkItem::image("i", "I", "3D Art", "/a.jpg", Some("/b.jpg"));
        let rotation = RotationState::new();
        assert_eq!(display_source(&item, &rotation, false).src(), Some("/a.jpg"));
        let hovered = display_source(&item, &rotation, true);
        assert_eq!(hovered.src(), Some("/b.jpg"));
        assert!(matches!(
            hovered,
            DisplaySource::Image {
                showing_variant: true,
                ..
            }
        ));
    }

    #[test]
    fn test_image_without_variant_falls_back_on_hover() {
        let item = WorkItem::image("i", "I", "3D Art", "/a.jpg", None);
        let source = display_source(&item, &RotationState::new(), true);
        assert_eq!(
            source,
            DisplaySource::Image {
                src: "/a.jpg".into(),
                showing_variant: false,
            }
        );
    }

    #[test]
    fn test_slideshow_follows_rotation() {
        let slides: Vec<String> = (0..4).map(|i| format!("/s{i}.jpg")).collect();
        let item = WorkItem::slideshow("s", "S", "Line Art", slides);
        let mut rotation = RotationState::new();
        assert_eq!(display_source(&item, &rotation, false).src(), Some("/s0.jpg"));
        rotation.advance("s", 4);
        rotation.advance("s", 4);
        assert_eq!(
            display_source(&item, &rotation, false),
            DisplaySource::Slide {
                src: "/s2.jpg".into(),
                index: 2,
                count: 4,
            }
        );
    }

    #[test]
    fn test_empty_slideshow_shows_primary() {
        let mut item = WorkItem::slideshow("s", "S", "Line Art", vec![]);
        item.primary_source = "/cover.jpg".into();
        let source = display_source(&item, &RotationState::new(), false);
        assert_eq!(source.src(), Some("/cover.jpg"));
    }

    #[test]
    fn test_empty_slideshow_without_cover_is_missing() {
        let item = WorkItem::slideshow("s", "S", "Line Art", vec![]);
        assert_eq!(item.primary_source, "");
        let source = display_source(&item, &RotationState::new(), false);
        assert_eq!(source, DisplaySource::Missing);
        assert_eq!(source.src(), None);
    }
}
