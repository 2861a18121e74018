//! Category filter: a row of pill buttons where exactly one is selected

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::FilterIcon;
use dioxus::prelude::*;

#[component]
pub fn CategoryFilter(
    options: Vec<String>,
    selected: String,
    on_select: EventHandler<String>,
    /// Item count per option, same order as `options`; empty hides badges
    #[props(default)]
    counts: Vec<usize>,
    /// Show a funnel icon inside each pill
    #[props(default)]
    with_icon: bool,
) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap justify-center gap-4",
            role: "group",
            aria_label: "Filter by category",
            for (i, option) in options.into_iter().enumerate() {
                Button {
                    key: "{option}",
                    variant: if option == selected { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    size: ButtonSize::Pill,
                    aria_pressed: Some(option == selected),
                    onclick: {
                        let option = option.clone();
                        move |_| on_select.call(option.clone())
                    },
                    if with_icon {
                        FilterIcon { class: "w-4 h-4" }
                    }
                    "{option}"
                    if let Some(count) = counts.get(i) {
                        span { class: "ml-1 px-2 py-0.5 rounded-full bg-white/10 text-xs", "{count}" }
                    }
                }
            }
        }
    }
}
