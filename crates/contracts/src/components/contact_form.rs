use crate::shared::validators::{
    validate_email, validate_min_length, validate_required, FieldError, FormErrors,
};
use serde::{Deserialize, Serialize};

/// Payload produced by a successful contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 3] {
        [ContactField::Name, ContactField::Email, ContactField::Message]
    }

    /// Field name, also used as the input `id`/`name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Sets the field whose `name` attribute is `name`. Unknown names leave
    /// the form untouched.
    pub fn set_named(&mut self, name: &str, value: String) -> Option<ContactField> {
        let field = ContactField::from_str(name)?;
        self.set(field, value);
        Some(field)
    }
}

/// First failing rule wins: required, then the field-specific rule.
pub fn validate_field(field: ContactField, value: &str) -> FieldError {
    match field {
        ContactField::Name => validate_required(value, "Name is required")
            .or_else(|| validate_min_length(value, 2, "Name must be at least 2 characters")),
        ContactField::Email => validate_required(value, "Email is required")
            .or_else(|| validate_email(value, "Please enter a valid email")),
        ContactField::Message => validate_required(value, "Message is required")
            .or_else(|| validate_min_length(value, 10, "Message must be at least 10 characters")),
    }
}

pub fn validate_form(form: &ContactFormData) -> FormErrors {
    ContactField::all()
        .into_iter()
        .filter_map(|field| {
            validate_field(field, form.get(field)).map(|error| (field.as_str().to_string(), error))
        })
        .collect()
}
