//! Fixed page header with in-page navigation

use crate::components::icons::{MenuIcon, XIcon};
use crate::display_types::NavLink;
use dioxus::prelude::*;

/// Page header - pure view with anchor links.
///
/// The mobile menu open state is local; links are plain fragment anchors so
/// the browser handles scrolling.
#[component]
pub fn HeaderNav(monogram: String, links: Vec<NavLink>) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "fixed top-0 left-0 right-0 z-50 glass-effect",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center py-4 lg:py-6",
                    a {
                        class: "text-2xl lg:text-3xl font-bold gradient-text font-display",
                        href: "#home",
                        "{monogram}"
                    }
                    nav { class: "hidden lg:flex gap-2",
                        for link in links.iter() {
                            a {
                                key: "{link.anchor}",
                                class: "px-4 py-2 rounded-full text-gray-300 hover:text-white hover:bg-white/10 transition-colors",
                                href: "#{link.anchor}",
                                "{link.label}"
                            }
                        }
                    }
                    button {
                        class: "lg:hidden p-2 text-gray-300 hover:text-white",
                        r#type: "button",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            XIcon { class: "w-6 h-6" }
                        } else {
                            MenuIcon { class: "w-6 h-6" }
                        }
                    }
                }
                if menu_open() {
                    nav { class: "lg:hidden flex flex-col gap-1 pb-4",
                        for link in links.iter() {
                            a {
                                key: "{link.anchor}",
                                class: "px-4 py-3 rounded-lg text-gray-300 hover:text-white hover:bg-white/10",
                                href: "#{link.anchor}",
                                onclick: move |_| menu_open.set(false),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
