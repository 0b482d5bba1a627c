use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn with(mut self, field: ContactField, value: String) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}

/// Hands a submission off. Nothing is delivered yet: the message is only
/// logged. Returns the cleared form.
pub fn submit(form: &ContactForm) -> ContactForm {
    match serde_json::to_string(form) {
        Ok(json) => info!("Form submitted: {}", json),
        Err(_) => info!("Form submitted: {:?}", form),
    }
    ContactForm::default()
}
