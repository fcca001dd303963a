//! Contact form draft.
//!
//! The form is a stub: values stay in memory, "submit" only checks the
//! required fields and shows a local acknowledgement. Nothing is sent.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Form fields, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Editable field of the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Client Name",
            ContactField::Phone => "Contact Number",
            ContactField::Email => "Corporate Email",
            ContactField::Message => "Project Brief",
        }
    }
}

/// Outcome of the last submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Invalid(Vec<ContactField>),
    Acknowledged,
}

/// Draft plus submit status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: ContactStatus,
}

impl ContactDraft {
    /// Required fields that are missing or malformed, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ContactField::Name);
        }
        if !looks_like_email(&self.email) {
            missing.push(ContactField::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(ContactField::Message);
        }
        missing
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.draft.name,
            ContactField::Phone => &mut self.draft.phone,
            ContactField::Email => &mut self.draft.email,
            ContactField::Message => &mut self.draft.message,
        };
        *slot = value;
        self.status = ContactStatus::Editing;
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.draft.name,
            ContactField::Phone => &self.draft.phone,
            ContactField::Email => &self.draft.email,
            ContactField::Message => &self.draft.message,
        }
    }

    /// Validate locally. A valid draft is cleared and acknowledged.
    pub fn submit(&mut self) -> &ContactStatus {
        let missing = self.draft.missing_fields();
        if missing.is_empty() {
            self.draft = ContactDraft::default();
            self.status = ContactStatus::Acknowledged;
        } else {
            self.status = ContactStatus::Invalid(missing);
        }
        &self.status
    }

    #[must_use]
    pub fn is_invalid(&self, field: ContactField) -> bool {
        matches!(&self.status, ContactStatus::Invalid(fields) if fields.contains(&field))
    }
}

fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !raw.contains(char::is_whitespace)
}
