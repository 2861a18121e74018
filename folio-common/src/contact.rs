//! Contact form draft and its field rules

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// Form order
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Element id and form field name
    pub fn id(self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Message => "Message",
        }
    }

    /// HTML input type; the message is a textarea and has none
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            ContactField::Email => Some("email"),
            ContactField::Phone => Some("tel"),
            ContactField::Message => None,
            _ => Some("text"),
        }
    }

    pub fn is_required(self) -> bool {
        self != ContactField::Phone
    }
}

/// What the visitor has typed so far
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Fields that block sending, in form order.
    ///
    /// A required field is invalid when blank after trimming. A non-blank
    /// email needs text on both sides of a single `@`.
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&field| {
                let value = self.get(field).trim();
                if value.is_empty() {
                    return field.is_required();
                }
                field == ContactField::Email && !looks_like_email(value)
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.invalid_fields().is_empty()
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_phone_is_the_only_optional_field() {
        let required: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(required, vec![ContactField::Phone]);
    }

    #[test]
    fn test_empty_draft_lists_required_fields_in_order() {
        assert_eq!(
            ContactMessage::default().invalid_fields(),
            vec![
                ContactField::FirstName,
                ContactField::LastName,
                ContactField::Email,
                ContactField::Message,
            ]
        );
    }

    #[test]
    fn test_filled_draft_is_complete_without_phone() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let mut draft = filled();
        draft.set(ContactField::Message, "   \n".into());
        assert_eq!(draft.invalid_fields(), vec![ContactField::Message]);
    }

    #[test]
    fn test_email_shape() {
        let mut draft = filled();
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            draft.set(ContactField::Email, bad.into());
            assert_eq!(draft.invalid_fields(), vec![ContactField::Email], "{bad}");
        }
        draft.set(ContactField::Email, "ada@example.com".into());
        assert!(draft.is_complete());
    }

    #[test]
    fn test_set_then_get_each_field() {
        let mut draft = ContactMessage::default();
        for field in ContactField::ALL {
            draft.set(field, field.id().to_string());
        }
        for field in ContactField::ALL {
            assert_eq!(draft.get(field), field.id());
        }
        assert_eq!(ContactField::Email.input_type(), Some("email"));
        assert_eq!(ContactField::Phone.input_type(), Some("tel"));
        assert_eq!(ContactField::Message.input_type(), None);
    }
}
