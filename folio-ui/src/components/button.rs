//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|pressed| if pressed { "true" } else { "false" }),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Amber-to-orange gradient - for primary actions and the active filter
    Primary,
    /// Translucent white - for secondary actions and inactive filters
    Secondary,
    /// No background - icon buttons on dark overlays
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Compact icon button
    Small,
    /// Standard padding
    Medium,
    /// Rounded pill used by category filters
    Pill,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let shape = match size {
        ButtonSize::Small => "inline-flex items-center justify-center rounded-lg p-2",
        ButtonSize::Medium => "inline-flex items-center gap-2 rounded-lg px-6 py-3 font-medium",
        ButtonSize::Pill => "inline-flex items-center gap-2 rounded-full px-6 py-3",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-to-r from-amber-600 to-orange-600 text-white shadow-lg shadow-amber-500/25"
        }
        ButtonVariant::Secondary => "bg-white/10 text-gray-300 hover:bg-white/20 hover:text-white",
        ButtonVariant::Ghost => "text-gray-300 hover:text-white hover:bg-white/10",
    };

    let computed_class = match &class {
        Some(extra) => format!("{shape} {variant_class} transition-all duration-300 {extra}"),
        None => format!("{shape} {variant_class} transition-all duration-300"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            aria_label,
            aria_pressed,
            onclick,
            {children}
        }
    }
}
