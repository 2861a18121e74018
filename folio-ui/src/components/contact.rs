//! Contact section: reachable channels, social links and a message form
//!
//! The form validates and holds its draft locally. Nothing is sent anywhere.

use crate::components::icons::{ContentIcon, SendIcon};
use crate::components::section_header::SectionHeader;
use crate::display_types::{ContactInfo, SocialLink};
use dioxus::prelude::*;
use folio_common::{ContactField, ContactMessage};
use tracing::debug;

#[component]
pub fn ContactSectionView(entries: Vec<ContactInfo>, social_links: Vec<SocialLink>) -> Element {
    rsx! {
        section { id: "contact", class: "section-padding",
            div { class: "container-padding max-w-7xl mx-auto",
                SectionHeader {
                    lead: "Get In".to_string(),
                    accent: "Touch".to_string(),
                    subtitle: "Have a project in mind? Reach out through any of these channels.".to_string(),
                }
                div { class: "grid lg:grid-cols-2 gap-12",
                    div {
                        div { class: "grid sm:grid-cols-2 gap-6",
                            for entry in entries {
                                ContactCard { key: "{entry.label}", entry: entry.clone() }
                            }
                        }
                        div { class: "flex justify-center lg:justify-start gap-4 mt-12",
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
                    }
                    ContactForm {}
                }
            }
        }
    }
}

/// Controlled message form.
///
/// Field errors show only after the first submit attempt.
#[component]
pub fn ContactForm() -> Element {
    let mut draft = use_signal(ContactMessage::default);
    let mut attempted = use_signal(|| false);
    let invalid = if attempted() {
        draft.read().invalid_fields()
    } else {
        Vec::new()
    };

    rsx! {
        form {
            class: "card-modern p-8 space-y-6",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                attempted.set(true);
                let message = draft.read();
                if message.is_complete() {
                    debug!(
                        "Contact form complete ({} chars), no delivery configured",
                        message.message.len()
                    );
                }
            },
            for (id, field) in ContactField::ALL.map(|f| (f.id(), f)) {
                FormField {
                    key: "{id}",
                    field,
                    value: draft.read().get(field).to_string(),
                    invalid: invalid.contains(&field),
                    on_input: move |value: String| draft.write().set(field, value),
                }
            }
            button { class: "w-full btn-primary inline-flex items-center justify-center gap-2 group", r#type: "submit",
                SendIcon { class: "w-5 h-5 group-hover:translate-x-1 transition-transform" }
                "Send Message"
            }
        }
    }
}

fn placeholder_for(field: ContactField) -> &'static str {
    match field {
        ContactField::FirstName => "John",
        ContactField::LastName => "Doe",
        ContactField::Email => "john@example.com",
        ContactField::Phone => "+1 (555) 123-4567",
        ContactField::Message => "Tell me about your project, goals, and how I can help you...",
    }
}

#[component]
fn FormField(
    field: ContactField,
    value: String,
    invalid: bool,
    on_input: EventHandler<String>,
) -> Element {
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let error = format!("Please fill in a valid {}.", field.label());
    let border = if invalid {
        "border-red-500"
    } else {
        "border-white/10 focus:border-amber-500"
    };
    let class = format!(
        "w-full bg-white/5 border {border} rounded-lg px-4 py-3 text-white placeholder-gray-400 focus:outline-none"
    );

    rsx! {
        div { class: "space-y-2",
            label { class: "text-sm font-medium text-gray-300", r#for: field.id(),
                "{label}"
            }
            match field.input_type() {
                Some(input_type) => rsx! {
                    input {
                        class: "{class} h-12",
                        id: field.id(),
                        name: field.id(),
                        r#type: input_type,
                        required: field.is_required(),
                        placeholder: placeholder_for(field),
                        aria_invalid: invalid,
                        value: "{value}",
                        oninput: move |evt| on_input.call(evt.value()),
                    }
                },
                None => rsx! {
                    textarea {
                        class: "{class} resize-none",
                        id: field.id(),
                        name: field.id(),
                        rows: "6",
                        required: field.is_required(),
                        placeholder: placeholder_for(field),
                        aria_invalid: invalid,
                        value: "{value}",
                        oninput: move |evt| on_input.call(evt.value()),
                    }
                },
            }
            if invalid {
                p { class: "text-sm text-red-400", "{error}" }
            }
        }
    }
}

#[component]
fn ContactCard(entry: ContactInfo) -> Element {
    let body = rsx! {
        div { class: "w-12 h-12 p-3 rounded-xl bg-gradient-to-br from-amber-600 to-orange-600 shrink-0",
            ContentIcon { kind: entry.icon, class: "w-full h-full text-white" }
        }
        div {
            div { class: "text-sm text-gray-400 font-medium", "{entry.label}" }
            div { class: "text-white font-semibold", "{entry.value}" }
        }
    };

    match &entry.href {
        Some(href) => rsx! {
            a {
                class: "card-modern p-6 flex items-center gap-4 hover:bg-white/5 transition-colors",
                href: "{href}",
                {body}
            }
        },
        None => rsx! {
            div { class: "card-modern p-6 flex items-center gap-4", {body} }
        },
    }
}
