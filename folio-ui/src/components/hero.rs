use crate::components::icons::{ChevronDownIcon, ContentIcon, DownloadIcon};
use crate::display_types::{HeroContent, SocialLink};
use dioxus::prelude::*;

/// Landing section: name, roles, social links
#[component]
pub fn HeroSectionView(content: HeroContent, social_links: Vec<SocialLink>) -> Element {
    let roles = content.roles.join(" · ");

    rsx! {
        section {
            id: "home",
            class: "min-h-screen flex flex-col items-center justify-center text-center px-4 pt-24",
            p { class: "text-lg text-amber-400 font-medium mb-4", "Hello, I'm" }
            h1 { class: "text-5xl lg:text-7xl font-bold font-display gradient-text mb-6",
                "{content.name}"
            }
            p { class: "text-2xl text-white mb-4", "{roles}" }
            p { class: "text-lg text-gray-300 max-w-2xl mb-10 text-balance", "{content.tagline}" }
            div { class: "flex flex-wrap justify-center gap-4 mb-10",
                a { class: "btn-primary inline-flex items-center gap-2", href: "#work",
                    "View My Work"
                }
                if let Some(href) = &content.resume_href {
                    a {
                        class: "btn-secondary inline-flex items-center gap-2",
                        href: "{href}",
                        download: true,
                        DownloadIcon { class: "w-5 h-5" }
                        "Download CV"
                    }
                }
            }
            div { class: "flex gap-4",
                for link in social_links {
                    a {
                        key: "{link.label}",
                        class: "w-12 h-12 rounded-full bg-white/10 hover:bg-white/20 flex items-center justify-center text-gray-300 hover:text-white transition-colors",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "{link.label}",
                        ContentIcon { kind: link.icon, class: "w-5 h-5" }
                    }
                }
            }
            a {
                class: "mt-16 text-gray-400 hover:text-white animate-bounce",
                href: "#about",
                aria_label: "Scroll to about",
                ChevronDownIcon { class: "w-8 h-8" }
            }
        }
    }
}
