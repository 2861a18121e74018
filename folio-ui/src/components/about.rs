//! About section: bio, skill bars, headline stats

use crate::components::icons::ContentIcon;
use crate::components::section_header::SectionHeader;
use crate::display_types::{Skill, Stat};
use dioxus::prelude::*;

#[component]
pub fn AboutSectionView(paragraphs: Vec<String>, skills: Vec<Skill>, stats: Vec<Stat>) -> Element {
    rsx! {
        section { id: "about", class: "section-padding",
            div { class: "container-padding max-w-7xl mx-auto",
                SectionHeader {
                    lead: "About".to_string(),
                    accent: "Me".to_string(),
                    subtitle: "The person behind the pixels".to_string(),
                }
                div { class: "grid lg:grid-cols-2 gap-12 items-start",
                    div { class: "space-y-6",
                        for (i, paragraph) in paragraphs.iter().enumerate() {
                            p { key: "{i}", class: "text-lg text-gray-300 leading-relaxed",
                                "{paragraph}"
                            }
                        }
                    }
                    div { class: "space-y-6",
                        for skill in skills {
                            SkillBar { key: "{skill.name}", skill: skill.clone() }
                        }
                    }
                }
                div { class: "grid grid-cols-2 md:grid-cols-3 gap-6 mt-16",
                    for stat in stats {
                        div {
                            key: "{stat.label}",
                            class: "card-modern p-6 text-center",
                            ContentIcon {
                                kind: stat.icon,
                                class: "w-6 h-6 text-amber-400 mx-auto mb-2",
                            }
                            div { class: "text-2xl font-bold gradient-text", "{stat.value}" }
                            div { class: "text-sm text-gray-400", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillBar(skill: Skill) -> Element {
    let percent = skill.bar_percent();

    rsx! {
        div { class: "flex items-center gap-4",
            ContentIcon { kind: skill.icon, class: "w-5 h-5 text-amber-400" }
            div { class: "flex-1",
                div { class: "flex justify-between mb-1",
                    span { class: "text-sm font-medium text-white", "{skill.name}" }
                    span { class: "text-sm text-gray-400", "{percent}%" }
                }
                div {
                    class: "h-2 bg-white/10 rounded-full overflow-hidden",
                    role: "progressbar",
                    aria_valuenow: "{percent}",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    div {
                        class: "h-full bg-gradient-to-r from-amber-600 to-orange-600 rounded-full",
                        style: "width: {percent}%",
                    }
                }
            }
        }
    }
}
