//! Work gallery: category filter plus a grid of image, video and slideshow tiles

use crate::components::category_filter::CategoryFilter;
use crate::components::icons::ImageIcon;
use crate::components::section_header::SectionHeader;
use crate::stores::gallery::use_gallery;
use dioxus::prelude::*;
use folio_common::{Catalog, DisplaySource, FrameEntry, GalleryFrame};

/// Work section bound to its own gallery state.
///
/// Mounting this component starts the slideshow timer; unmounting it stops
/// the timer and drops the state.
#[component]
pub fn WorkSection(catalog: Catalog, initial_category: String, slide_interval_ms: u64) -> Element {
    let gallery = use_gallery(catalog, initial_category, slide_interval_ms);

    rsx! {
        WorkSectionView {
            frame: gallery.frame(),
            category_options: gallery.category_options(),
            category_counts: gallery.category_counts(),
            on_select_category: move |label: String| gallery.select_category(label),
            on_pointer_enter: move |id: String| gallery.pointer_enter(id),
            on_pointer_leave: move |id: String| gallery.pointer_leave(id),
        }
    }
}

/// Pure view over one gallery frame
#[component]
pub fn WorkSectionView(
    frame: GalleryFrame,
    category_options: Vec<String>,
    #[props(default)] category_counts: Vec<usize>,
    on_select_category: EventHandler<String>,
    on_pointer_enter: EventHandler<String>,
    on_pointer_leave: EventHandler<String>,
) -> Element {
    rsx! {
        section {
            id: "work",
            class: "section-padding bg-gradient-to-b from-dark-900/50 to-dark-800/50",
            div { class: "container-padding max-w-7xl mx-auto",
                SectionHeader {
                    lead: "My".to_string(),
                    accent: "Work".to_string(),
                    subtitle: "A showcase of my creative journey through digital and traditional art"
                        .to_string(),
                }
                div { class: "mb-12",
                    CategoryFilter {
                        options: category_options,
                        counts: category_counts,
                        selected: frame.selected.clone(),
                        on_select: on_select_category,
                    }
                }
                if frame.entries.is_empty() {
                    div { class: "flex flex-col items-center gap-3 text-gray-400 py-16",
                        ImageIcon { class: "w-12 h-12" }
                        p { "Nothing in {frame.selected} yet." }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for entry in frame.entries.iter() {
                            WorkTile {
                                key: "{entry.id}",
                                entry: entry.clone(),
                                on_pointer_enter,
                                on_pointer_leave,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WorkTile(
    entry: FrameEntry,
    on_pointer_enter: EventHandler<String>,
    on_pointer_leave: EventHandler<String>,
) -> Element {
    let enter_id = entry.id.clone();
    let leave_id = entry.id.clone();
    let focus_id = entry.id.clone();
    let blur_id = entry.id.clone();

    rsx! {
        div {
            class: "relative group aspect-square overflow-hidden rounded-2xl",
            tabindex: "0",
            "data-testid": "work-tile",
            onmouseenter: move |_| on_pointer_enter.call(enter_id.clone()),
            onmouseleave: move |_| on_pointer_leave.call(leave_id.clone()),
            onfocusin: move |_| on_pointer_enter.call(focus_id.clone()),
            onfocusout: move |_| on_pointer_leave.call(blur_id.clone()),
            match &entry.source {
                DisplaySource::Video { src, playback } => rsx! {
                    video {
                        class: "w-full h-full object-cover",
                        src: "{src}",
                        autoplay: playback.autoplay,
                        r#loop: playback.looped,
                        muted: playback.muted,
                        playsinline: playback.inline,
                    }
                },
                DisplaySource::Image { src, showing_variant } => {
                    let alt = if *showing_variant {
                        format!("{} - Variant", entry.title)
                    } else {
                        entry.title.clone()
                    };
                    rsx! {
                        img {
                            class: "w-full h-full object-cover absolute inset-0 transition-all duration-500 ease-out group-hover:scale-110",
                            src: "{src}",
                            alt: "{alt}",
                        }
                    }
                }
                DisplaySource::Slide { src, index, count } => {
                    let alt = format!("{} ({} of {})", entry.title, index + 1, count);
                    rsx! {
                        img {
                            class: "w-full h-full object-cover slide-in",
                            src: "{src}",
                            alt: "{alt}",
                        }
                    }
                }
                DisplaySource::Missing => rsx! {
                    div { class: "w-full h-full flex items-center justify-center bg-white/5 text-gray-500",
                        ImageIcon { class: "w-12 h-12" }
                    }
                },
            }
            div { class: "absolute inset-0 bg-gradient-to-t from-dark-900 via-dark-900/20 to-transparent opacity-0 group-hover:opacity-100 transition-all duration-500 ease-out",
                div { class: "absolute bottom-0 left-0 right-0 p-6",
                    h3 { class: "text-xl font-bold text-white mb-2", "{entry.title}" }
                    p { class: "text-gray-300 text-sm", "{entry.category}" }
                }
            }
        }
    }
}
