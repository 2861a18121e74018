use dioxus::prelude::*;

/// Centered section title with a gradient accent word and a subtitle
#[component]
pub fn SectionHeader(lead: String, accent: String, subtitle: String) -> Element {
    rsx! {
        div { class: "text-center mb-16 space-y-4",
            h2 { class: "text-4xl lg:text-5xl font-bold font-display",
                span { class: "text-white", "{lead} " }
                span { class: "gradient-text", "{accent}" }
            }
            p { class: "text-xl text-gray-300 max-w-3xl mx-auto text-balance", "{subtitle}" }
        }
    }
}
