//! Featured projects: filterable grid of cards with a detail overlay

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::category_filter::CategoryFilter;
use crate::components::icons::{ArrowRightIcon, ContentIcon, ExternalLinkIcon, XIcon};
use crate::components::section_header::SectionHeader;
use crate::display_types::IconKind;
use dioxus::prelude::*;
use folio_common::{category_counts, filter_by_category, find_project, Project};

/// Technologies listed on a card before collapsing into "+N"
const CARD_TECH_LIMIT: usize = 3;

/// Projects section - pure view.
///
/// Selection and the open project are owned by the caller.
#[component]
pub fn ProjectsSectionView(
    projects: Vec<Project>,
    category_options: Vec<String>,
    selected_category: String,
    on_select_category: EventHandler<String>,
    open_project: Option<u32>,
    on_open_project: EventHandler<u32>,
    on_close_project: EventHandler<()>,
) -> Element {
    let visible: Vec<Project> = filter_by_category(&projects, &selected_category)
        .into_iter()
        .cloned()
        .collect();
    let counts = category_counts(&projects, &category_options);
    let opened = open_project.and_then(|id| find_project(&projects, id).cloned());

    rsx! {
        section { id: "portfolio", class: "section-padding",
            div { class: "container-padding max-w-7xl mx-auto",
                SectionHeader {
                    lead: "Featured".to_string(),
                    accent: "Projects".to_string(),
                    subtitle: "Explore my latest work and see how I bring ideas to life through design and code"
                        .to_string(),
                }
                div { class: "mb-12",
                    CategoryFilter {
                        options: category_options,
                        counts,
                        selected: selected_category.clone(),
                        on_select: on_select_category,
                        with_icon: true,
                    }
                }
                if visible.is_empty() {
                    p { class: "text-center text-gray-400", "No projects in {selected_category} yet." }
                } else {
                    div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for project in visible {
                            ProjectCard {
                                key: "{project.id}",
                                project: project.clone(),
                                on_open: on_open_project,
                            }
                        }
                    }
                }
                div { class: "text-center mt-16 space-y-6",
                    h3 { class: "text-2xl lg:text-3xl font-bold text-white", "Ready to Start Your Project?" }
                    p { class: "text-lg text-gray-300 max-w-2xl mx-auto",
                        "Let's collaborate and create something amazing together"
                    }
                    a {
                        class: "btn-primary inline-flex items-center gap-2 group",
                        href: "#contact",
                        "Get In Touch"
                        ArrowRightIcon { class: "w-5 h-5 group-hover:translate-x-1 transition-transform" }
                    }
                }
            }
            if let Some(project) = opened {
                ProjectModal { project, on_close: on_close_project }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_open: EventHandler<u32>) -> Element {
    let preview = project.tech_preview(CARD_TECH_LIMIT);
    let shown: Vec<String> = preview.shown.to_vec();
    let hidden = preview.hidden;
    let id = project.id;

    rsx! {
        div {
            class: if project.featured { "group cursor-pointer md:col-span-2 lg:col-span-1" } else { "group cursor-pointer" },
            "data-testid": "project-card",
            onclick: move |_| on_open.call(id),
            div { class: "h-full card-modern overflow-hidden",
                div { class: "relative overflow-hidden",
                    img {
                        src: "{project.image}",
                        alt: "{project.title}",
                        class: "w-full h-64 object-cover group-hover:scale-110 transition-transform duration-500",
                    }
                    div { class: "absolute inset-0 flex items-center justify-center gap-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                        ProjectLink {
                            href: project.live_url.clone(),
                            label: "View live".to_string(),
                            github: false,
                        }
                        ProjectLink {
                            href: project.github_url.clone(),
                            label: "View code".to_string(),
                            github: true,
                        }
                    }
                    if project.featured {
                        div { class: "absolute top-4 left-4 px-3 py-1 bg-gradient-to-r from-amber-500 to-orange-500 rounded-full text-xs font-semibold text-white",
                            "Featured"
                        }
                    }
                }
                div { class: "p-6 space-y-4",
                    div { class: "space-y-2",
                        div { class: "flex items-center justify-between",
                            span { class: "text-sm text-amber-400 font-medium", "{project.category}" }
                            ArrowRightIcon { class: "w-4 h-4 text-gray-400 group-hover:text-amber-400 transition-all" }
                        }
                        h3 { class: "text-xl font-bold text-white group-hover:text-amber-400 transition-colors",
                            "{project.title}"
                        }
                    }
                    p { class: "text-gray-300 text-sm leading-relaxed", "{project.description}" }
                    div { class: "flex flex-wrap gap-2",
                        for tech in shown {
                            span {
                                key: "{tech}",
                                class: "px-2 py-1 bg-white/10 rounded-md text-xs text-gray-300",
                                "{tech}"
                            }
                        }
                        if hidden > 0 {
                            span { class: "px-2 py-1 bg-white/10 rounded-md text-xs text-gray-300",
                                "+{hidden}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Overlay icon link that does not open the card it sits on
#[component]
fn ProjectLink(href: String, label: String, github: bool) -> Element {
    rsx! {
        a {
            class: "p-2 rounded-lg bg-white/20 backdrop-blur-sm hover:bg-white/30 text-white",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            onclick: move |evt| evt.stop_propagation(),
            if github {
                ContentIcon { kind: IconKind::Github, class: "w-4 h-4" }
            } else {
                ExternalLinkIcon { class: "w-4 h-4" }
            }
        }
    }
}

/// Full project detail, closed by the X button or a backdrop click
#[component]
fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{project.title}",
            onclick: move |_| on_close.call(()),
            div {
                class: "relative max-w-4xl w-full max-h-[90vh] overflow-y-auto card-modern",
                onclick: move |evt| evt.stop_propagation(),
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    class: Some("absolute top-4 right-4 z-10 bg-white/20".to_string()),
                    aria_label: Some("Close".to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-4 h-4" }
                }
                div { class: "p-8 space-y-6",
                    div { class: "space-y-4",
                        div { class: "flex items-center gap-4",
                            span { class: "px-3 py-1 bg-amber-500/20 text-amber-400 rounded-full text-sm font-medium",
                                "{project.category}"
                            }
                            if project.featured {
                                span { class: "px-3 py-1 bg-gradient-to-r from-amber-500 to-orange-500 text-white rounded-full text-sm font-semibold",
                                    "Featured"
                                }
                            }
                        }
                        h3 { class: "text-3xl font-bold text-white", "{project.title}" }
                        p { class: "text-lg text-gray-300 leading-relaxed", "{project.description}" }
                    }
                    img {
                        src: "{project.image}",
                        alt: "{project.title}",
                        class: "w-full h-64 object-cover rounded-xl",
                    }
                    div { class: "space-y-4",
                        h4 { class: "text-xl font-semibold text-white", "Technologies Used" }
                        div { class: "flex flex-wrap gap-3",
                            for tech in project.technologies.iter() {
                                span {
                                    key: "{tech}",
                                    class: "px-4 py-2 bg-white/10 rounded-lg text-gray-300 font-medium",
                                    "{tech}"
                                }
                            }
                        }
                    }
                    div { class: "flex gap-4",
                        a {
                            class: "btn-primary inline-flex items-center gap-2",
                            href: "{project.live_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            ExternalLinkIcon { class: "w-4 h-4" }
                            "View Live"
                        }
                        a {
                            class: "btn-secondary inline-flex items-center gap-2",
                            href: "{project.github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            ContentIcon { kind: IconKind::Github, class: "w-4 h-4" }
                            "View Code"
                        }
                    }
                }
            }
        }
    }
}
