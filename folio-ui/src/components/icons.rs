//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use crate::display_types::IconKind;
use dioxus::prelude::*;

/// Shared `<svg>` wrapper with Lucide stroke settings
#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// Render the icon for a content record
#[component]
pub fn ContentIcon(kind: IconKind, #[props(default = "w-4 h-4")] class: &'static str) -> Element {
    match kind {
        IconKind::Code => rsx! {
            LucideSvg { class,
                path { d: "m18 16 4-4-4-4" }
                path { d: "m6 8-4 4 4 4" }
                path { d: "m14.5 4-5 16" }
            }
        },
        IconKind::Palette => rsx! {
            LucideSvg { class,
                circle { cx: "13.5", cy: "6.5", r: ".5", fill: "currentColor" }
                circle { cx: "17.5", cy: "10.5", r: ".5", fill: "currentColor" }
                circle { cx: "8.5", cy: "7.5", r: ".5", fill: "currentColor" }
                circle { cx: "6.5", cy: "12.5", r: ".5", fill: "currentColor" }
                path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" }
            }
        },
        IconKind::Lightbulb => rsx! {
            LucideSvg { class,
                path { d: "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5" }
                path { d: "M9 18h6" }
                path { d: "M10 22h4" }
            }
        },
        IconKind::Target => rsx! {
            LucideSvg { class,
                circle { cx: "12", cy: "12", r: "10" }
                circle { cx: "12", cy: "12", r: "6" }
                circle { cx: "12", cy: "12", r: "2" }
            }
        },
        IconKind::Award => rsx! {
            LucideSvg { class,
                circle { cx: "12", cy: "8", r: "6" }
                path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
            }
        },
        IconKind::Users => rsx! {
            LucideSvg { class,
                path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                circle { cx: "9", cy: "7", r: "4" }
                path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
            }
        },
        IconKind::Coffee => rsx! {
            LucideSvg { class,
                path { d: "M10 2v2" }
                path { d: "M14 2v2" }
                path { d: "M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1" }
                path { d: "M6 2v2" }
            }
        },
        IconKind::Smartphone => rsx! {
            LucideSvg { class,
                rect {
                    x: "5",
                    y: "2",
                    width: "14",
                    height: "20",
                    rx: "2",
                    ry: "2",
                }
                path { d: "M12 18h.01" }
            }
        },
        IconKind::Globe => rsx! {
            LucideSvg { class,
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
                path { d: "M2 12h20" }
            }
        },
        IconKind::Zap => rsx! {
            LucideSvg { class,
                path { d: "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" }
            }
        },
        IconKind::Mail => rsx! {
            LucideSvg { class,
                rect {
                    x: "2",
                    y: "4",
                    width: "20",
                    height: "16",
                    rx: "2",
                }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            }
        },
        IconKind::Phone => rsx! {
            LucideSvg { class,
                path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
            }
        },
        IconKind::MapPin => rsx! {
            LucideSvg { class,
                path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
                circle { cx: "12", cy: "10", r: "3" }
            }
        },
        IconKind::Clock => rsx! {
            LucideSvg { class,
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 6v6l4 2" }
            }
        },
        IconKind::Github => rsx! {
            LucideSvg { class,
                path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
                path { d: "M9 18c-4.51 2-5-2-7-2" }
            }
        },
        IconKind::Linkedin => rsx! {
            LucideSvg { class,
                path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
                rect {
                    x: "2",
                    y: "9",
                    width: "4",
                    height: "12",
                }
                circle { cx: "4", cy: "4", r: "2" }
            }
        },
        IconKind::Facebook => rsx! {
            LucideSvg { class,
                path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
            }
        },
    }
}

/// Menu icon (hamburger - three horizontal lines)
#[component]
pub fn MenuIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M4 5h16" }
            path { d: "M4 12h16" }
            path { d: "M4 19h16" }
        }
    }
}

/// X icon (close/dismiss)
#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Chevron down icon (scroll hint)
#[component]
pub fn ChevronDownIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class, path { d: "m6 9 6 6 6-6" } }
    }
}

/// External link icon
#[component]
pub fn ExternalLinkIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

/// Arrow right icon (call to action)
#[component]
pub fn ArrowRightIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}

/// Filter icon (funnel)
#[component]
pub fn FilterIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M22 3H2l8 9.46V19l4 2v-8.54L22 3z" }
        }
    }
}

/// Download icon (resume)
#[component]
pub fn DownloadIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            path { d: "m7 10 5 5 5-5" }
            path { d: "M12 15V3" }
        }
    }
}

/// Image icon (placeholder for missing media)
#[component]
pub fn ImageIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "3",
                y: "3",
                width: "18",
                height: "18",
                rx: "2",
                ry: "2",
            }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
        }
    }
}

/// Send icon (contact form submit)
#[component]
pub fn SendIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        }
    }
}
