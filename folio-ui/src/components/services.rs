use crate::components::icons::ContentIcon;
use crate::components::section_header::SectionHeader;
use crate::display_types::{ProcessStep, Service};
use dioxus::prelude::*;

/// What I offer, followed by the working process
#[component]
pub fn ServicesSectionView(services: Vec<Service>, steps: Vec<ProcessStep>) -> Element {
    rsx! {
        section { id: "services", class: "section-padding",
            div { class: "container-padding max-w-7xl mx-auto",
                SectionHeader {
                    lead: "What I".to_string(),
                    accent: "Do".to_string(),
                    subtitle: "Design and development services from first sketch to launch".to_string(),
                }
                div { class: "grid md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for service in services {
                        div {
                            key: "{service.title}",
                            class: "card-modern p-8 space-y-4 group",
                            div { class: "w-14 h-14 p-3 rounded-2xl bg-gradient-to-br from-amber-600 to-orange-600",
                                ContentIcon { kind: service.icon, class: "w-full h-full text-white" }
                            }
                            h3 { class: "text-xl font-bold text-white group-hover:text-amber-400 transition-colors",
                                "{service.title}"
                            }
                            p { class: "text-gray-300 text-sm leading-relaxed", "{service.description}" }
                        }
                    }
                }
                if !steps.is_empty() {
                    div { class: "mt-20",
                        h3 { class: "text-2xl lg:text-3xl font-bold text-white text-center mb-12",
                            "My Process"
                        }
                        ol { class: "grid md:grid-cols-2 lg:grid-cols-4 gap-8",
                            for (i, step) in steps.iter().enumerate() {
                                li { key: "{step.title}", class: "text-center space-y-3",
                                    div { class: "w-16 h-16 mx-auto p-4 rounded-full bg-white/10",
                                        ContentIcon { kind: step.icon, class: "w-full h-full text-white" }
                                    }
                                    div { class: "text-sm text-amber-400 font-semibold",
                                        "Step "
                                        {(i + 1).to_string()}
                                    }
                                    h4 { class: "text-lg font-semibold text-white", "{step.title}" }
                                    p { class: "text-sm text-gray-400", "{step.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
