use dioxus::prelude::*;

#[component]
pub fn Footer(owner: String, year: u16) -> Element {
    rsx! {
        footer { class: "border-t border-white/10 py-8 text-center text-sm text-gray-500",
            "© {year} {owner}. All rights reserved."
        }
    }
}
